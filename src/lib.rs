//! teamart - Seeded team-colour art generator
//!
//! A library for drawing decorative art from a team's three-colour palette:
//! abstract compositions, jersey mockups and flag mockups. Generation is
//! deterministic for a given palette, pattern kind and seed, and drawings
//! rasterize to PNG.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod pattern;
pub mod render;
pub mod teams;
pub mod types;

pub use config::Config;
pub use error::{ArtError, Result};
pub use pattern::{PatternKind, PatternRenderer, Variant};
pub use render::{encode_png, export_filename, write_png, Rasterizer};
pub use teams::{League, Team, TeamTable};
pub use types::{Canvas, Colour, DashStyle, Drawing, Palette, Point, Shape, Stroke, Style};
