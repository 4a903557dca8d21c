//! PNG output for rasterized drawings.
//!
//! Encodes images in memory for display or writes them to disk, and builds
//! the conventional download filename.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{ArtError, Result};
use crate::pattern::{PatternKind, Variant};

/// Encode an image as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| ArtError::Encode {
            message: format!("Failed to encode PNG: {}", e),
        })?;
    Ok(bytes)
}

/// Write an image to a PNG file.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| ArtError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    Ok(())
}

/// Build the export filename `{team}_{artifact}_{kind}_{seed}.png`.
///
/// Spaces in the team name become underscores; the kind segment is omitted
/// when there is no kind.
pub fn export_filename(
    team: &str,
    variant: Variant,
    kind: Option<PatternKind>,
    seed: u64,
) -> String {
    let team = team.trim().replace(' ', "_");
    match kind {
        Some(kind) => format!("{}_{}_{}_{}.png", team, variant.artifact(), kind.label(), seed),
        None => format!("{}_{}_{}.png", team, variant.artifact(), seed),
    }
}
