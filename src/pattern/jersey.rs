//! Jersey mockup: torso, sleeves and collar, a pattern layer, then the
//! logo and sponsor placeholders on top.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::types::{Canvas, Colour, Drawing, Palette, Point, Shape, Style};

use super::{background, partition, Bounds, PatternKind};

/// Pattern kinds a jersey can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JerseyKind {
    Stripe,
    Hoops,
    Dots,
    Checkers,
}

impl JerseyKind {
    pub(crate) fn from_kind(kind: PatternKind) -> Option<Self> {
        match kind {
            PatternKind::Stripe => Some(JerseyKind::Stripe),
            PatternKind::Hoops => Some(JerseyKind::Hoops),
            PatternKind::Dots => Some(JerseyKind::Dots),
            PatternKind::Checkers => Some(JerseyKind::Checkers),
            PatternKind::VerticalStripe
            | PatternKind::HorizontalStripe
            | PatternKind::DiagonalCross
            | PatternKind::CornerQuarter => None,
        }
    }
}

/// Random ranges for one jersey variant.
#[derive(Debug, Clone)]
pub(crate) struct JerseyRecipe {
    /// Band count for stripes and hoops.
    pub bands: RangeInclusive<usize>,
    /// Cells per side for checkers.
    pub grid: RangeInclusive<usize>,
    /// Number of dots.
    pub dots: RangeInclusive<usize>,
    /// Dot radius range (half-open).
    pub dot_radius: (f64, f64),
}

pub(crate) const JERSEY: JerseyRecipe = JerseyRecipe {
    bands: 5..=9,
    grid: 4..=8,
    dots: 30..=80,
    dot_radius: (0.08, 0.3),
};

pub(crate) const JERSEY_ALT: JerseyRecipe = JerseyRecipe {
    bands: 3..=7,
    grid: 6..=10,
    dots: 50..=100,
    dot_radius: (0.05, 0.2),
};

const TORSO: [Point; 8] = [
    Point::new(3.0, 1.0),
    Point::new(5.0, 0.8),
    Point::new(7.0, 1.0),
    Point::new(7.0, 6.6),
    Point::new(6.1, 8.0),
    Point::new(5.0, 7.4),
    Point::new(3.9, 8.0),
    Point::new(3.0, 6.6),
];

/// Region covered by pattern layers: the torso below the shoulder cut.
const BODY: Bounds = Bounds::new(3.0, 1.0, 4.0, 5.6);

const LEFT_SLEEVE: Bounds = Bounds::new(1.8, 5.4, 1.2, 2.2);
const RIGHT_SLEEVE: Bounds = Bounds::new(7.0, 5.4, 1.2, 2.2);
const COLLAR: Bounds = Bounds::new(4.3, 7.5, 1.4, 0.4);
const SPONSOR: Bounds = Bounds::new(3.8, 3.6, 2.4, 0.9);
const LOGO: (f64, f64, f64) = (6.0, 6.3, 0.35);

const OUTLINE_WIDTH: f64 = 2.0;

pub(super) fn draw<R: Rng>(
    recipe: &JerseyRecipe,
    canvas: Canvas,
    palette: &Palette,
    kind: JerseyKind,
    rng: &mut R,
) -> Drawing {
    let mut drawing = Drawing::new(canvas);
    drawing.push(background(&canvas, palette.tertiary));

    let body = Style::filled(palette.primary).with_edge(Colour::BLACK, OUTLINE_WIDTH);
    drawing.push(Shape::Polygon {
        points: TORSO.to_vec(),
        style: body,
    });
    for part in [LEFT_SLEEVE, RIGHT_SLEEVE, COLLAR] {
        drawing.push(rect(part, body));
    }

    match kind {
        JerseyKind::Stripe => {
            let n = rng.gen_range(recipe.bands.clone());
            for (i, (x, w)) in partition(BODY.x, BODY.width, n).into_iter().enumerate() {
                let colour = alternate(palette, i);
                drawing.push(Shape::rect(x, BODY.y, w, BODY.height, Style::filled(colour)));
            }
        }
        JerseyKind::Hoops => {
            let n = rng.gen_range(recipe.bands.clone());
            for (i, (y, h)) in partition(BODY.y, BODY.height, n).into_iter().enumerate() {
                let colour = alternate(palette, i);
                drawing.push(Shape::rect(BODY.x, y, BODY.width, h, Style::filled(colour)));
            }
        }
        JerseyKind::Dots => {
            let count = rng.gen_range(recipe.dots.clone());
            let (r_min, r_max) = recipe.dot_radius;
            for _ in 0..count {
                // Whole dot stays inside the body.
                let radius = rng.gen_range(r_min..r_max);
                let x = rng.gen_range(BODY.x + radius..BODY.x + BODY.width - radius);
                let y = rng.gen_range(BODY.y + radius..BODY.y + BODY.height - radius);
                let colour = secondary_or_tertiary(palette, rng);
                drawing.push(Shape::circle(x, y, radius, Style::filled(colour)));
            }
        }
        JerseyKind::Checkers => {
            let n = rng.gen_range(recipe.grid.clone());
            let columns = partition(BODY.x, BODY.width, n);
            let rows = partition(BODY.y, BODY.height, n);
            for (i, &(x, w)) in columns.iter().enumerate() {
                for (j, &(y, h)) in rows.iter().enumerate() {
                    if (i + j) % 2 == 1 {
                        let colour = secondary_or_tertiary(palette, rng);
                        drawing.push(Shape::rect(x, y, w, h, Style::filled(colour)));
                    }
                }
            }
        }
    }

    // The pattern covers the torso edge, so trace it again.
    drawing.push(Shape::Polygon {
        points: TORSO.to_vec(),
        style: Style::outline(Colour::BLACK, OUTLINE_WIDTH),
    });

    // Accents always land on top of the pattern.
    let accent = Style::filled(palette.tertiary);
    let (lx, ly, lr) = LOGO;
    drawing.push(Shape::circle(lx, ly, lr, accent));
    drawing.push(rect(SPONSOR, accent));

    drawing
}

fn rect(bounds: Bounds, style: Style) -> Shape {
    Shape::rect(bounds.x, bounds.y, bounds.width, bounds.height, style)
}

fn alternate(palette: &Palette, band: usize) -> Colour {
    if band % 2 == 0 {
        palette.primary
    } else {
        palette.secondary
    }
}

fn secondary_or_tertiary<R: Rng>(palette: &Palette, rng: &mut R) -> Colour {
    if rng.gen_bool(0.5) {
        palette.secondary
    } else {
        palette.tertiary
    }
}
