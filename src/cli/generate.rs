//! Generate command implementation.
//!
//! Renders one piece of team art and writes it as a PNG, or prints the
//! drawing as JSON.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use rand::Rng;

use crate::config::Config;
use crate::error::{ArtError, Result};
use crate::output::{display_path, plural, Printer};
use crate::pattern::{PatternKind, PatternRenderer, Variant};
use crate::render::{export_filename, write_png, Rasterizer, MAX_DPI};

/// Seeds drawn when none is given fall in this range.
const SEED_RANGE: std::ops::RangeInclusive<u64> = 1..=10000;

/// Render team art to PNG
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Team name (see `teamart teams`)
    #[arg(required = true)]
    pub team: String,

    /// What to draw
    #[arg(long, short, value_enum)]
    pub variant: Option<Variant>,

    /// Pattern kind, e.g. `stripe` or `vertical-stripe` (defaults to the
    /// variant's first kind)
    #[arg(long, short)]
    pub kind: Option<String>,

    /// Random seed (a random seed in 1..=10000 is used when omitted)
    #[arg(long, short)]
    pub seed: Option<u64>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output resolution in dots per inch (1 to 1200)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_DPI as i64))]
    pub dpi: Option<u32>,

    /// Print the drawing as JSON to stdout instead of writing a PNG
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: GenerateArgs, config: &Config, printer: &Printer) -> Result<()> {
    let table = config.team_table()?;
    let team = table.get(&args.team)?;

    let variant = args.variant.unwrap_or(config.variant);
    let kind = match &args.kind {
        Some(name) => Some(name.parse::<PatternKind>()?),
        None => variant.default_kind(),
    };
    let seed = args
        .seed
        .unwrap_or_else(|| rand::thread_rng().gen_range(SEED_RANGE));

    printer.status(
        "Rendering",
        &format!(
            "{} {} ({}{}, seed {})",
            team.name,
            printer.dim(&format!("[{}]", team.league)),
            variant,
            kind.map(|k| format!(", {}", k)).unwrap_or_default(),
            seed
        ),
    );
    printer.info(
        "Palette",
        &team
            .palette
            .colours()
            .map(|c| printer.swatch(c))
            .join("  "),
    );

    let drawing = PatternRenderer::new(variant).render_seeded(&team.palette, kind, seed)?;

    if args.json {
        println!("{}", drawing.to_json()?);
        return Ok(());
    }

    let output = args.output.unwrap_or_else(|| config.output.clone());
    if !output.exists() {
        fs::create_dir_all(&output).map_err(|e| ArtError::Io {
            path: output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let rasterizer = Rasterizer::new(args.dpi.unwrap_or(config.dpi));
    let image = rasterizer.rasterize(&drawing);

    let path = output.join(export_filename(&team.name, variant, kind, seed));
    write_png(&image, &path)?;

    printer.status(
        "Finished",
        &format!(
            "{} ({}x{}, {})",
            display_path(&path),
            image.width(),
            image.height(),
            plural(drawing.len(), "shape", "shapes")
        ),
    );

    Ok(())
}
