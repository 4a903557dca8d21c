//! Abstract composition: soft rectangles, a jittered circle cluster and
//! dashed line work, layered in that order.

use std::f64::consts::TAU;

use rand::Rng;

use crate::types::{Colour, DashStyle, Drawing, Palette, Point, Shape, Stroke, Style};

use super::{background, Variant};

const BG_RECTS: usize = 5;
const CIRCLES: usize = 50;
const LINES: usize = 10;
const CLUSTER_CENTER: (f64, f64) = (5.0, 5.0);

pub(super) fn draw<R: Rng>(palette: &Palette, rng: &mut R) -> Drawing {
    let canvas = Variant::Abstract.canvas();
    let all = palette.colours();
    let mut drawing = Drawing::new(canvas);

    drawing.push(background(&canvas, palette.tertiary));

    for _ in 0..BG_RECTS {
        let x = rng.gen_range(-1.0..10.0);
        let y = rng.gen_range(-1.0..10.0);
        let width = rng.gen_range(3.0..8.0);
        let height = rng.gen_range(3.0..8.0);
        let colour = pick(rng, &all);
        let alpha = rng.gen_range(0.1..0.3);

        drawing.push(Shape::rect(
            x,
            y,
            width,
            height,
            Style::filled(colour).with_alpha(alpha),
        ));
    }

    let (cx, cy) = CLUSTER_CENTER;
    for _ in 0..CIRCLES {
        let r = rng.gen_range(0.1..4.0);
        let theta = rng.gen_range(0.0..TAU);
        let x = cx + r * theta.cos() * rng.gen_range(0.5..1.5);
        let y = cy + r * theta.sin() * rng.gen_range(0.5..1.5);
        let radius = rng.gen_range(0.1..0.8);

        let fill = pick(rng, &[palette.primary, palette.secondary]);
        let alpha = rng.gen_range(0.4..0.8);
        let edge = pick(rng, &all);
        let edge_width = rng.gen_range(0.5..2.0);

        drawing.push(Shape::circle(
            x,
            y,
            radius,
            Style::filled(fill)
                .with_edge(edge, edge_width)
                .with_alpha(alpha),
        ));
    }

    for _ in 0..LINES {
        let from = Point::new(rng.gen_range(0.0..10.0), rng.gen_range(0.0..10.0));
        let to = Point::new(rng.gen_range(0.0..10.0), rng.gen_range(0.0..10.0));
        let stroke = Stroke {
            colour: pick(rng, &all),
            width: rng.gen_range(1.0..4.0),
            dash: DashStyle::ALL[rng.gen_range(0..DashStyle::ALL.len())],
            alpha: rng.gen_range(0.5..1.0),
        };

        drawing.push(Shape::Line { from, to, stroke });
    }

    drawing
}

fn pick<R: Rng>(rng: &mut R, colours: &[Colour]) -> Colour {
    colours[rng.gen_range(0..colours.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn drawing(seed: u64) -> Drawing {
        let palette = Palette::from_hex(&["#A50044", "#004D98", "#FDBE11"]).unwrap();
        draw(&palette, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_layer_counts_and_order() {
        let d = drawing(3);
        assert_eq!(d.len(), 1 + BG_RECTS + CIRCLES + LINES);

        let kinds: Vec<&str> = d.shapes().iter().map(Shape::kind_name).collect();
        assert_eq!(kinds[0], "rect");
        assert!(kinds[1..=BG_RECTS].iter().all(|k| *k == "rect"));
        assert!(kinds[1 + BG_RECTS..1 + BG_RECTS + CIRCLES]
            .iter()
            .all(|k| *k == "circle"));
        assert!(kinds[1 + BG_RECTS + CIRCLES..].iter().all(|k| *k == "line"));
    }

    #[test]
    fn test_background_is_tertiary() {
        let d = drawing(9);
        match &d.shapes()[0] {
            Shape::Rect { style, width, .. } => {
                assert_eq!(style.fill, Some(Colour::from_hex("#FDBE11").unwrap()));
                assert_eq!(*width, 10.0);
            }
            other => panic!("expected background rect, got {:?}", other),
        }
    }

    #[test]
    fn test_parameter_ranges() {
        for seed in 0..20 {
            for shape in drawing(seed).shapes().iter().skip(1) {
                match shape {
                    Shape::Rect {
                        x,
                        width,
                        style,
                        ..
                    } => {
                        assert!((-1.0..10.0).contains(x));
                        assert!((3.0..8.0).contains(width));
                        assert!((0.1..0.3).contains(&style.alpha));
                        assert!(style.edge.is_none());
                    }
                    Shape::Circle { radius, style, .. } => {
                        assert!((0.1..0.8).contains(radius));
                        assert!((0.4..0.8).contains(&style.alpha));
                        let edge = style.edge.expect("circles carry an edge");
                        assert!((0.5..2.0).contains(&edge.width));
                    }
                    Shape::Line { from, stroke, .. } => {
                        assert!((0.0..10.0).contains(&from.x));
                        assert!((1.0..4.0).contains(&stroke.width));
                        assert!((0.5..1.0).contains(&stroke.alpha));
                    }
                    Shape::Polygon { .. } => panic!("abstract art draws no polygons"),
                }
            }
        }
    }

    #[test]
    fn test_circle_fill_is_primary_or_secondary() {
        let primary = Colour::from_hex("#A50044").unwrap();
        let secondary = Colour::from_hex("#004D98").unwrap();
        for shape in drawing(11).shapes() {
            if let Shape::Circle { style, .. } = shape {
                let fill = style.fill.unwrap();
                assert!(fill == primary || fill == secondary);
            }
        }
    }
}
