//! Flag mockup on a grey pole.

use rand::Rng;

use crate::types::{Colour, DashStyle, Drawing, Palette, Point, Shape, Stroke, Style};

use super::{background, partition, Bounds, PatternKind, Variant};

/// The flag cloth; pattern layers are confined to it.
pub(crate) const CLOTH: Bounds = Bounds::new(2.0, 2.5, 9.0, 6.0);

const POLE: Bounds = Bounds::new(1.6, 0.5, 0.4, 8.2);
const BANDS: std::ops::RangeInclusive<usize> = 2..=5;
const CROSS_WIDTH: (f64, f64) = (10.0, 20.0);
/// Accent square side as a fraction of the cloth height.
const ACCENT_SCALE: f64 = 0.3;

/// Pattern kinds a flag can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FlagKind {
    VerticalStripe,
    HorizontalStripe,
    DiagonalCross,
    CornerQuarter,
}

impl FlagKind {
    pub(crate) fn from_kind(kind: PatternKind) -> Option<Self> {
        match kind {
            PatternKind::VerticalStripe => Some(FlagKind::VerticalStripe),
            PatternKind::HorizontalStripe => Some(FlagKind::HorizontalStripe),
            PatternKind::DiagonalCross => Some(FlagKind::DiagonalCross),
            PatternKind::CornerQuarter => Some(FlagKind::CornerQuarter),
            PatternKind::Stripe
            | PatternKind::Hoops
            | PatternKind::Dots
            | PatternKind::Checkers => None,
        }
    }
}

pub(super) fn draw<R: Rng>(palette: &Palette, kind: FlagKind, rng: &mut R) -> Drawing {
    let canvas = Variant::Flag.canvas();
    let mut drawing = Drawing::new(canvas);

    drawing.push(background(&canvas, palette.tertiary));
    drawing.push(rect(
        CLOTH,
        Style::filled(palette.primary).with_edge(Colour::BLACK, 1.0),
    ));
    drawing.push(rect(POLE, Style::filled(Colour::GREY)));

    match kind {
        FlagKind::VerticalStripe => {
            let n = rng.gen_range(BANDS);
            for (x, w) in partition(CLOTH.x, CLOTH.width, n) {
                let colour = band_colour(palette, rng);
                drawing.push(Shape::rect(x, CLOTH.y, w, CLOTH.height, Style::filled(colour)));
            }
        }
        FlagKind::HorizontalStripe => {
            let n = rng.gen_range(BANDS);
            for (y, h) in partition(CLOTH.y, CLOTH.height, n) {
                let colour = band_colour(palette, rng);
                drawing.push(Shape::rect(CLOTH.x, y, CLOTH.width, h, Style::filled(colour)));
            }
        }
        FlagKind::DiagonalCross => {
            let width = rng.gen_range(CROSS_WIDTH.0..CROSS_WIDTH.1);
            let stroke = Stroke {
                colour: palette.secondary,
                width,
                dash: DashStyle::Solid,
                alpha: 1.0,
            };
            let (left, right) = (CLOTH.x, CLOTH.x + CLOTH.width);
            let (bottom, top) = (CLOTH.y, CLOTH.y + CLOTH.height);
            drawing.push(Shape::Line {
                from: Point::new(left, bottom),
                to: Point::new(right, top),
                stroke,
            });
            drawing.push(Shape::Line {
                from: Point::new(left, top),
                to: Point::new(right, bottom),
                stroke,
            });

            let side = CLOTH.height * ACCENT_SCALE;
            let (cx, cy) = CLOTH.center();
            drawing.push(Shape::rect(
                cx - side / 2.0,
                cy - side / 2.0,
                side,
                side,
                Style::filled(palette.tertiary),
            ));
        }
        FlagKind::CornerQuarter => {
            let (w, h) = (CLOTH.width / 2.0, CLOTH.height / 2.0);
            let (mid_x, mid_y) = CLOTH.center();
            let style = Style::filled(palette.secondary);
            // Either top-left with bottom-right, or top-right with bottom-left.
            if rng.gen_bool(0.5) {
                drawing.push(Shape::rect(CLOTH.x, mid_y, w, h, style));
                drawing.push(Shape::rect(mid_x, CLOTH.y, w, h, style));
            } else {
                drawing.push(Shape::rect(mid_x, mid_y, w, h, style));
                drawing.push(Shape::rect(CLOTH.x, CLOTH.y, w, h, style));
            }
        }
    }

    drawing
}

fn rect(bounds: Bounds, style: Style) -> Shape {
    Shape::rect(bounds.x, bounds.y, bounds.width, bounds.height, style)
}

fn band_colour<R: Rng>(palette: &Palette, rng: &mut R) -> Colour {
    if rng.gen_bool(0.5) {
        palette.secondary
    } else {
        palette.primary
    }
}
