//! Rendering module for teamart.
//!
//! This module turns drawings into pixels and pixels into PNG output.

mod png;
mod raster;

pub use png::{encode_png, export_filename, write_png};
pub use raster::{Rasterizer, DEFAULT_DPI, MAX_DPI};
