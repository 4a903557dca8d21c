//! Drawing rasterizer.
//!
//! Shapes are painted in order onto an RGBA surface. Coverage is estimated
//! with a 4x4 grid of samples per pixel, and each shape is composited with
//! source-over blending. Fills are painted before edges, and edges are
//! centred on the outline.

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::types::{Canvas, Colour, DashStyle, Drawing, Point, Shape, Style};

/// Samples per pixel along each axis.
const SUBSAMPLES: u32 = 4;

/// Default output resolution, matching a 100 dpi figure.
pub const DEFAULT_DPI: u32 = 100;

/// Highest accepted resolution. An 8 inch canvas is 9600 pixels wide here.
pub const MAX_DPI: u32 = 1200;

/// Converts drawings to images at a fixed resolution.
#[derive(Debug, Clone, Copy)]
pub struct Rasterizer {
    dpi: u32,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new(DEFAULT_DPI)
    }
}

impl Rasterizer {
    /// Create a rasterizer. The dpi is clamped to `1..=MAX_DPI`.
    pub fn new(dpi: u32) -> Self {
        Self {
            dpi: dpi.clamp(1, MAX_DPI),
        }
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Rasterize a drawing to an RGBA image.
    pub fn rasterize(&self, drawing: &Drawing) -> RgbaImage {
        let (width, height) = drawing.canvas.pixel_size(self.dpi);
        let mut surface = Surface::new(width, height);
        let view = View::new(&drawing.canvas, width, height, self.dpi);

        for shape in drawing.shapes() {
            surface.draw(shape, &view);
        }

        tracing::debug!(width, height, shapes = drawing.len(), "rasterized drawing");
        surface.into_image()
    }
}

/// Maps data coordinates to pixel coordinates (y up to y down).
struct View {
    x0: f64,
    y0: f64,
    sx: f64,
    sy: f64,
    height: f64,
    /// Pixels per point.
    pt: f64,
}

impl View {
    fn new(canvas: &Canvas, width: u32, height: u32, dpi: u32) -> Self {
        Self {
            x0: canvas.x_range.0,
            y0: canvas.y_range.0,
            sx: f64::from(width) / canvas.data_width(),
            sy: f64::from(height) / canvas.data_height(),
            height: f64::from(height),
            pt: f64::from(dpi) / 72.0,
        }
    }

    fn map(&self, p: Point) -> (f64, f64) {
        (
            (p.x - self.x0) * self.sx,
            self.height - (p.y - self.y0) * self.sy,
        )
    }
}

/// Pixel-space bounding box: (min_x, min_y, max_x, max_y).
type BBox = (f64, f64, f64, f64);

struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl Surface {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Colour::TRANSPARENT; width as usize * height as usize],
        }
    }

    fn draw(&mut self, shape: &Shape, view: &View) {
        match shape {
            Shape::Rect {
                x,
                y,
                width,
                height,
                style,
            } => {
                let corners = [
                    Point::new(*x, *y),
                    Point::new(x + width, *y),
                    Point::new(x + width, y + height),
                    Point::new(*x, y + height),
                ];
                self.polygon(&corners, style, view);
            }
            Shape::Polygon { points, style } => self.polygon(points, style, view),
            Shape::Circle {
                center,
                radius,
                style,
            } => self.ellipse(*center, *radius, style, view),
            Shape::Line { from, to, stroke } => {
                let a = view.map(*from);
                let b = view.map(*to);
                let half = stroke.width * view.pt / 2.0;
                let dash = scaled_dash(stroke.dash, stroke.width * view.pt);
                let bbox = (
                    a.0.min(b.0) - half,
                    a.1.min(b.1) - half,
                    a.0.max(b.0) + half,
                    a.1.max(b.1) + half,
                );
                self.paint(bbox, stroke.colour, stroke.alpha, |px, py| {
                    in_dashed_segment(px, py, a, b, half, &dash)
                });
            }
        }
    }

    fn polygon(&mut self, points: &[Point], style: &Style, view: &View) {
        if points.len() < 3 {
            return;
        }
        let mapped: Vec<(f64, f64)> = points.iter().map(|p| view.map(*p)).collect();
        let bbox = mapped.iter().fold(
            (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
            |(x0, y0, x1, y1), &(x, y)| (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        );

        if let Some(fill) = style.fill {
            self.paint(bbox, fill, style.alpha, |px, py| in_polygon(px, py, &mapped));
        }
        if let Some(edge) = style.edge {
            let half = edge.width * view.pt / 2.0;
            let grown = (bbox.0 - half, bbox.1 - half, bbox.2 + half, bbox.3 + half);
            self.paint(grown, edge.colour, style.alpha, |px, py| {
                near_outline(px, py, &mapped, half)
            });
        }
    }

    fn ellipse(&mut self, center: Point, radius: f64, style: &Style, view: &View) {
        let (cx, cy) = view.map(center);
        let (rx, ry) = (radius * view.sx, radius * view.sy);
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        // Normalised radial distance, scaled back to pixels.
        let mean = (rx + ry) / 2.0;
        let dist = move |px: f64, py: f64| {
            let nx = (px - cx) / rx;
            let ny = (py - cy) / ry;
            (nx * nx + ny * ny).sqrt() * mean
        };

        if let Some(fill) = style.fill {
            let bbox = (cx - rx, cy - ry, cx + rx, cy + ry);
            self.paint(bbox, fill, style.alpha, |px, py| dist(px, py) <= mean);
        }
        if let Some(edge) = style.edge {
            let half = edge.width * view.pt / 2.0;
            let bbox = (cx - rx - half, cy - ry - half, cx + rx + half, cy + ry + half);
            self.paint(bbox, edge.colour, style.alpha, |px, py| {
                (dist(px, py) - mean).abs() <= half
            });
        }
    }

    /// Composite `colour` wherever `inside` holds, weighted by sample coverage.
    fn paint<F>(&mut self, bbox: BBox, colour: Colour, alpha: f64, inside: F)
    where
        F: Fn(f64, f64) -> bool,
    {
        let x_start = bbox.0.floor().max(0.0) as u32;
        let y_start = bbox.1.floor().max(0.0) as u32;
        let x_end = (bbox.2.ceil().max(0.0) as u32).min(self.width);
        let y_end = (bbox.3.ceil().max(0.0) as u32).min(self.height);

        let step = 1.0 / f64::from(SUBSAMPLES);
        let total = (SUBSAMPLES * SUBSAMPLES) as f32;

        for y in y_start..y_end {
            for x in x_start..x_end {
                let mut hits = 0u32;
                for sy in 0..SUBSAMPLES {
                    for sx in 0..SUBSAMPLES {
                        let px = f64::from(x) + (f64::from(sx) + 0.5) * step;
                        let py = f64::from(y) + (f64::from(sy) + 0.5) * step;
                        if inside(px, py) {
                            hits += 1;
                        }
                    }
                }
                if hits == 0 {
                    continue;
                }

                let idx = self.index(x, y);
                let coverage = hits as f32 / total;
                self.pixels[idx] = colour.over(self.pixels[idx], alpha as f32 * coverage);
            }
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn into_image(self) -> RgbaImage {
        ImageBuffer::from_fn(self.width, self.height, |x, y| {
            Rgba(self.pixels[self.index(x, y)].to_rgba())
        })
    }
}

/// Even-odd point-in-polygon test.
fn in_polygon(px: f64, py: f64, points: &[(f64, f64)]) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

fn near_outline(px: f64, py: f64, points: &[(f64, f64)], half: f64) -> bool {
    let n = points.len();
    (0..n).any(|i| {
        let (t, perp, len) = project(px, py, points[i], points[(i + 1) % n]);
        // Include the joins so corners are not notched.
        let along = t.clamp(0.0, len);
        let dx = t - along;
        (dx * dx + perp * perp).sqrt() <= half
    })
}

/// Project a point onto segment `a -> b`.
///
/// Returns (distance along the segment, perpendicular distance, length).
fn project(px: f64, py: f64, a: (f64, f64), b: (f64, f64)) -> (f64, f64, f64) {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        let (ex, ey) = (px - a.0, py - a.1);
        return (0.0, (ex * ex + ey * ey).sqrt(), 0.0);
    }
    let (ux, uy) = (dx / len, dy / len);
    let (ex, ey) = (px - a.0, py - a.1);
    (ex * ux + ey * uy, (ex * uy - ey * ux).abs(), len)
}

/// Butt-capped segment with an optional dash pattern in pixels.
fn in_dashed_segment(
    px: f64,
    py: f64,
    a: (f64, f64),
    b: (f64, f64),
    half: f64,
    dash: &[f64],
) -> bool {
    let (t, perp, len) = project(px, py, a, b);
    if t < 0.0 || t > len || perp > half {
        return false;
    }
    dash_on(t, dash)
}

fn scaled_dash(style: DashStyle, width_px: f64) -> Vec<f64> {
    style.pattern().iter().map(|d| d * width_px).collect()
}

/// Whether distance `t` along a line falls on an "on" dash segment.
fn dash_on(t: f64, dash: &[f64]) -> bool {
    let period: f64 = dash.iter().sum();
    if dash.is_empty() || period <= 0.0 {
        return true;
    }
    let mut pos = t.rem_euclid(period);
    for (i, len) in dash.iter().enumerate() {
        if pos < *len {
            return i % 2 == 0;
        }
        pos -= len;
    }
    false
}
