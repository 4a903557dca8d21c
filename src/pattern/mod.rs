//! Seeded pattern generation.
//!
//! A [`PatternRenderer`] turns a team [`Palette`] and an optional
//! [`PatternKind`] into a [`Drawing`]. Every random choice is drawn from the
//! generator handed to [`PatternRenderer::render`] in a fixed order, so the
//! same palette, kind and seed always produce the same shapes.

mod abstract_art;
mod flag;
mod jersey;

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{ArtError, Result};
use crate::types::{Canvas, Drawing, Palette, Shape, Style};

use flag::FlagKind;
use jersey::{JerseyKind, JERSEY, JERSEY_ALT};

/// The style selector for a pattern layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    Stripe,
    Hoops,
    Dots,
    Checkers,
    VerticalStripe,
    HorizontalStripe,
    DiagonalCross,
    CornerQuarter,
}

impl PatternKind {
    pub const ALL: [PatternKind; 8] = [
        PatternKind::Stripe,
        PatternKind::Hoops,
        PatternKind::Dots,
        PatternKind::Checkers,
        PatternKind::VerticalStripe,
        PatternKind::HorizontalStripe,
        PatternKind::DiagonalCross,
        PatternKind::CornerQuarter,
    ];

    /// Compact label used in export filenames, e.g. `VerticalStripe`.
    pub fn label(self) -> &'static str {
        match self {
            PatternKind::Stripe => "Stripe",
            PatternKind::Hoops => "Hoops",
            PatternKind::Dots => "Dots",
            PatternKind::Checkers => "Checkers",
            PatternKind::VerticalStripe => "VerticalStripe",
            PatternKind::HorizontalStripe => "HorizontalStripe",
            PatternKind::DiagonalCross => "DiagonalCross",
            PatternKind::CornerQuarter => "CornerQuarter",
        }
    }

    /// Command-line name, e.g. `vertical-stripe`.
    pub fn cli_name(self) -> &'static str {
        match self {
            PatternKind::Stripe => "stripe",
            PatternKind::Hoops => "hoops",
            PatternKind::Dots => "dots",
            PatternKind::Checkers => "checkers",
            PatternKind::VerticalStripe => "vertical-stripe",
            PatternKind::HorizontalStripe => "horizontal-stripe",
            PatternKind::DiagonalCross => "diagonal-cross",
            PatternKind::CornerQuarter => "corner-quarter",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cli_name())
    }
}

impl FromStr for PatternKind {
    type Err = ArtError;

    /// Accepts `vertical-stripe`, `Vertical Stripe`, `VerticalStripe` and so on.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(*c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        PatternKind::ALL
            .into_iter()
            .find(|kind| kind.label().to_lowercase() == key)
            .ok_or_else(|| ArtError::InvalidPatternKind {
                message: format!("unrecognized pattern kind '{}'", s),
                help: Some(format!(
                    "Known kinds: {}",
                    PatternKind::ALL.map(PatternKind::cli_name).join(", ")
                )),
            })
    }
}

/// Which artifact is drawn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Layered rectangles, circles and lines
    #[default]
    Abstract,
    /// Jersey mockup
    Jersey,
    /// Jersey mockup with denser pattern ranges
    JerseyAlt,
    /// Flag on a pole
    Flag,
}

const JERSEY_KINDS: &[PatternKind] = &[
    PatternKind::Stripe,
    PatternKind::Hoops,
    PatternKind::Dots,
    PatternKind::Checkers,
];

const FLAG_KINDS: &[PatternKind] = &[
    PatternKind::VerticalStripe,
    PatternKind::HorizontalStripe,
    PatternKind::DiagonalCross,
    PatternKind::CornerQuarter,
];

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Abstract,
        Variant::Jersey,
        Variant::JerseyAlt,
        Variant::Flag,
    ];

    /// Canvas size and axis limits.
    pub fn canvas(self) -> Canvas {
        match self {
            Variant::Abstract => Canvas::new(8.0, 8.0, (0.0, 10.0), (0.0, 10.0)),
            Variant::Jersey => Canvas::new(7.0, 7.0, (0.0, 10.0), (0.0, 10.0)),
            Variant::JerseyAlt => Canvas::new(6.0, 6.0, (0.0, 10.0), (0.0, 10.0)),
            Variant::Flag => Canvas::new(8.0, 6.0, (0.0, 12.0), (0.0, 9.0)),
        }
    }

    /// Artifact label used in export filenames.
    pub fn artifact(self) -> &'static str {
        match self {
            Variant::Abstract => "AbstractArt",
            Variant::Jersey => "Jersey",
            Variant::JerseyAlt => "JerseyAlt",
            Variant::Flag => "Flag",
        }
    }

    /// Pattern kinds this variant accepts. Empty for the abstract variant,
    /// which takes no kind at all.
    pub fn kinds(self) -> &'static [PatternKind] {
        match self {
            Variant::Abstract => &[],
            Variant::Jersey | Variant::JerseyAlt => JERSEY_KINDS,
            Variant::Flag => FLAG_KINDS,
        }
    }

    pub fn default_kind(self) -> Option<PatternKind> {
        self.kinds().first().copied()
    }

    /// Check that `kind` is acceptable for this variant.
    pub fn validate_kind(self, kind: Option<PatternKind>) -> Result<()> {
        let supported = self.kinds();
        let accepted = match kind {
            None => supported.is_empty(),
            Some(kind) => supported.contains(&kind),
        };
        if accepted {
            Ok(())
        } else {
            Err(self.kind_error(kind))
        }
    }

    /// Map `kind` onto a recipe's own kind type, failing the same way
    /// [`Variant::validate_kind`] does.
    fn narrow<K>(
        self,
        kind: Option<PatternKind>,
        to: fn(PatternKind) -> Option<K>,
    ) -> Result<K> {
        kind.and_then(to).ok_or_else(|| self.kind_error(kind))
    }

    fn kind_error(self, kind: Option<PatternKind>) -> ArtError {
        let supported = self.kinds();
        match kind {
            None => ArtError::InvalidPatternKind {
                message: format!("the {} variant needs a pattern kind", self),
                help: Some(format!("Choose one of: {}", kind_list(supported))),
            },
            Some(kind) if supported.is_empty() => ArtError::InvalidPatternKind {
                message: format!("the {} variant takes no pattern kind, got '{}'", self, kind),
                help: None,
            },
            Some(kind) => ArtError::InvalidPatternKind {
                message: format!("'{}' is not a {} pattern", kind, self),
                help: Some(format!("Choose one of: {}", kind_list(supported))),
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Abstract => "abstract",
            Variant::Jersey => "jersey",
            Variant::JerseyAlt => "jersey-alt",
            Variant::Flag => "flag",
        };
        f.write_str(name)
    }
}

fn kind_list(kinds: &[PatternKind]) -> String {
    kinds
        .iter()
        .map(|k| k.cli_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Axis-aligned region a pattern layer is confined to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Split `[start, start + extent]` into `n` equal bands as `(offset, size)`.
///
/// Each band ends exactly where the next begins, so the bands tile the
/// interval with no gap or overlap.
pub(crate) fn partition(start: f64, extent: f64, n: usize) -> Vec<(f64, f64)> {
    let n = n.max(1);
    let edge = |k: usize| start + extent * k as f64 / n as f64;
    (0..n)
        .map(|k| {
            let lo = edge(k);
            let hi = if k + 1 == n { start + extent } else { edge(k + 1) };
            (lo, hi - lo)
        })
        .collect()
}

/// Full-canvas background rectangle.
pub(crate) fn background(canvas: &Canvas, colour: crate::types::Colour) -> Shape {
    Shape::rect(
        canvas.x_range.0,
        canvas.y_range.0,
        canvas.data_width(),
        canvas.data_height(),
        Style::filled(colour),
    )
}

/// Draws one variant's artwork.
#[derive(Debug, Clone, Copy)]
pub struct PatternRenderer {
    variant: Variant,
}

impl PatternRenderer {
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Render a drawing, drawing all randomness from `rng`.
    pub fn render<R: Rng>(
        &self,
        palette: &Palette,
        kind: Option<PatternKind>,
        rng: &mut R,
    ) -> Result<Drawing> {
        let drawing = match self.variant {
            Variant::Abstract => {
                self.variant.validate_kind(kind)?;
                abstract_art::draw(palette, rng)
            }
            Variant::Jersey => {
                let kind = self.variant.narrow(kind, JerseyKind::from_kind)?;
                jersey::draw(&JERSEY, self.variant.canvas(), palette, kind, rng)
            }
            Variant::JerseyAlt => {
                let kind = self.variant.narrow(kind, JerseyKind::from_kind)?;
                jersey::draw(&JERSEY_ALT, self.variant.canvas(), palette, kind, rng)
            }
            Variant::Flag => {
                let kind = self.variant.narrow(kind, FlagKind::from_kind)?;
                flag::draw(palette, kind, rng)
            }
        };

        tracing::debug!(
            variant = %self.variant,
            kind = kind.map(PatternKind::cli_name).unwrap_or("none"),
            shapes = drawing.len(),
            "rendered drawing"
        );

        Ok(drawing)
    }

    /// Render with a fresh generator seeded from `seed`.
    pub fn render_seeded(
        &self,
        palette: &Palette,
        kind: Option<PatternKind>,
        seed: u64,
    ) -> Result<Drawing> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.render(palette, kind, &mut rng)
    }
}
