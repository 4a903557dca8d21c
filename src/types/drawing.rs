//! The ordered list of draw operations produced by one render call.

use serde::Serialize;

use super::Shape;

/// Physical canvas and the data-space window mapped onto it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Canvas {
    /// Width in inches.
    pub width_in: f64,
    /// Height in inches.
    pub height_in: f64,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl Canvas {
    pub const fn new(
        width_in: f64,
        height_in: f64,
        x_range: (f64, f64),
        y_range: (f64, f64),
    ) -> Self {
        Self {
            width_in,
            height_in,
            x_range,
            y_range,
        }
    }

    /// Pixel dimensions at the given resolution.
    pub fn pixel_size(&self, dpi: u32) -> (u32, u32) {
        let dpi = f64::from(dpi.max(1));
        (
            (self.width_in * dpi).round().max(1.0) as u32,
            (self.height_in * dpi).round().max(1.0) as u32,
        )
    }

    pub fn data_width(&self) -> f64 {
        self.x_range.1 - self.x_range.0
    }

    pub fn data_height(&self) -> f64 {
        self.y_range.1 - self.y_range.0
    }
}

/// A drawing: shapes in painter's order, later entries on top.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Drawing {
    pub canvas: Canvas,
    shapes: Vec<Shape>,
}

impl Drawing {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            shapes: Vec::new(),
        }
    }

    /// Append a shape on top of everything drawn so far.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> crate::error::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| crate::error::ArtError::Encode {
            message: format!("Failed to serialize drawing: {}", e),
        })
    }
}
