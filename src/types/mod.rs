//! Core domain types for teamart.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGBA colour values
//! - `Palette` - The primary/secondary/tertiary team colours
//! - `Shape` - Draw operations (rectangles, circles, polygons, lines)
//! - `Drawing` - An ordered list of shapes on a canvas

mod colour;
mod drawing;
mod palette;
mod shape;

pub use colour::Colour;
pub use drawing::{Canvas, Drawing};
pub use palette::Palette;
pub use shape::{DashStyle, Edge, Point, Shape, Stroke, Style};
