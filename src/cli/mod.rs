pub mod completions;
pub mod generate;
pub mod kinds;
pub mod teams;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// teamart - Seeded team-colour art, jerseys and flags
#[derive(Parser, Debug)]
#[command(name = "teamart")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./teamart.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render team art to PNG
    Generate(generate::GenerateArgs),

    /// List known teams with their league and colours
    Teams(teams::TeamsArgs),

    /// List pattern kinds for each variant
    Kinds(kinds::KindsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Variant;

    #[test]
    fn test_parse_generate_args() {
        let cli = Cli::try_parse_from([
            "teamart",
            "generate",
            "Arsenal FC",
            "--variant",
            "jersey-alt",
            "--kind",
            "dots",
            "--seed",
            "42",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.team, "Arsenal FC");
                assert_eq!(args.variant, Some(Variant::JerseyAlt));
                assert_eq!(args.kind.as_deref(), Some("dots"));
                assert_eq!(args.seed, Some(42));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_dpi_range() {
        let parse =
            |dpi: &str| Cli::try_parse_from(["teamart", "generate", "Napoli", "--dpi", dpi]);

        assert!(parse("0").is_err());
        assert!(parse("9000").is_err());
        match parse("1200").unwrap().command {
            Commands::Generate(args) => assert_eq!(args.dpi, Some(1200)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["teamart", "kinds", "--config", "art.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("art.yaml")));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
