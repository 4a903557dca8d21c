//! Shape primitives that make up a drawing.
//!
//! Coordinates are in data units (the drawing's axis limits), widths are in
//! points (1/72 inch), and opacity is a `0.0..=1.0` factor applied to both
//! fill and edge.

use serde::Serialize;

use super::Colour;

/// A point in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Outline drawn centred on a shape's boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub colour: Colour,
    /// Width in points.
    pub width: f64,
}

/// Fill, edge and opacity for closed shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Style {
    pub fill: Option<Colour>,
    pub edge: Option<Edge>,
    pub alpha: f64,
}

impl Style {
    /// Opaque fill with no edge.
    pub fn filled(colour: Colour) -> Self {
        Self {
            fill: Some(colour),
            edge: None,
            alpha: 1.0,
        }
    }

    /// Edge only, nothing filled.
    pub fn outline(colour: Colour, width: f64) -> Self {
        Self {
            fill: None,
            edge: Some(Edge { colour, width }),
            alpha: 1.0,
        }
    }

    pub fn with_edge(mut self, colour: Colour, width: f64) -> Self {
        self.edge = Some(Edge { colour, width });
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

/// Dash pattern for line segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashStyle {
    Solid,
    Dashed,
    DashDot,
}

impl DashStyle {
    pub const ALL: [DashStyle; 3] = [DashStyle::Solid, DashStyle::Dashed, DashStyle::DashDot];

    /// On/off lengths in multiples of the line width. Empty means solid.
    pub fn pattern(self) -> &'static [f64] {
        match self {
            DashStyle::Solid => &[],
            DashStyle::Dashed => &[3.7, 1.6],
            DashStyle::DashDot => &[6.4, 1.6, 1.0, 1.6],
        }
    }
}

/// Stroke for line segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub colour: Colour,
    /// Width in points.
    pub width: f64,
    pub dash: DashStyle,
    pub alpha: f64,
}

/// A single draw operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Shape {
    /// Axis-aligned rectangle anchored at its lower-left corner.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        style: Style,
    },
    Circle {
        center: Point,
        radius: f64,
        style: Style,
    },
    Polygon {
        points: Vec<Point>,
        style: Style,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
}

impl Shape {
    pub fn rect(x: f64, y: f64, width: f64, height: f64, style: Style) -> Self {
        Shape::Rect {
            x,
            y,
            width,
            height,
            style,
        }
    }

    pub fn circle(cx: f64, cy: f64, radius: f64, style: Style) -> Self {
        Shape::Circle {
            center: Point::new(cx, cy),
            radius,
            style,
        }
    }

    /// Short lowercase name, used in logs and summaries.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Rect { .. } => "rect",
            Shape::Circle { .. } => "circle",
            Shape::Polygon { .. } => "polygon",
            Shape::Line { .. } => "line",
        }
    }
}
