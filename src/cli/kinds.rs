use clap::Args;

use crate::error::Result;
use crate::pattern::Variant;

/// List pattern kinds for each variant
#[derive(Args, Debug)]
pub struct KindsArgs {
    /// Only list kinds for this variant
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,
}

pub fn run(args: KindsArgs) -> Result<()> {
    let variants: Vec<Variant> = match args.variant {
        Some(variant) => vec![variant],
        None => Variant::ALL.to_vec(),
    };

    for variant in variants {
        println!("{}", kinds_line(variant));
    }
    Ok(())
}

fn kinds_line(variant: Variant) -> String {
    let kinds: Vec<&str> = variant.kinds().iter().map(|k| k.cli_name()).collect();
    if kinds.is_empty() {
        format!("{}\t(none)", variant)
    } else {
        format!("{}\t{}", variant, kinds.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_line() {
        assert_eq!(kinds_line(Variant::Abstract), "abstract\t(none)");
        assert_eq!(
            kinds_line(Variant::Flag),
            "flag\tvertical-stripe, horizontal-stripe, diagonal-cross, corner-quarter"
        );
        assert_eq!(
            kinds_line(Variant::JerseyAlt),
            "jersey-alt\tstripe, hoops, dots, checkers"
        );
    }
}
