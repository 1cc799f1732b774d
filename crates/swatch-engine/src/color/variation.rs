//! Palette variations derived from a base color.
//!
//! Every variation is deterministic in the base color.

use serde::{Deserialize, Serialize};

use super::codec::to_hex;
use super::hsl::{hsl_to_rgba, rgba_to_hsl};
use crate::error::ColorError;
use crate::paint::Color;

/// Number of tint/shade steps.
pub const STEPS: usize = 5;

/// Blend factor added per tint/shade step.
pub const STEP_FACTOR: f64 = 0.15;

/// A named color entry: hex form, channel values and display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swatch {
    pub hex: String,
    pub rgba: Color,
    pub name: String,
}

impl Swatch {
    pub fn new(rgba: Color, name: impl Into<String>) -> Self {
        Self { hex: to_hex(rgba), rgba, name: name.into() }
    }
}

/// The family of variations to derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariationKind {
    /// Blends toward white.
    Tints,
    /// Blends toward black.
    Shades,
    /// Complement plus the two ±30° analogous hues.
    Complementary,
}

impl VariationKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tints => "tints",
            Self::Shades => "shades",
            Self::Complementary => "complementary",
        }
    }

    /// Parse a variation kind from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().find(|k| k.name().eq_ignore_ascii_case(name)).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Tints, Self::Shades, Self::Complementary]
    }
}

/// Derives the variations of `kind` from `base`.
///
/// - tints: 5 entries `Tint 1..5`, each channel `c + (1 - c) * 0.15i`, capped at 1
/// - shades: 5 entries `Shade 1..5`, each channel `c * (1 - 0.15i)`, floored at 0
/// - complementary: hue +180 (`Complementary`), +30 (`Analogous 1`), -30 (`Analogous 2`)
///
/// Tints and shades keep the base alpha; complementary entries are opaque.
/// An out-of-range base is rejected with [`ColorError::InvalidColor`], never clamped.
pub fn generate(base: Color, kind: VariationKind) -> Result<Vec<Swatch>, ColorError> {
    let base = base.validate()?;
    Ok(match kind {
        VariationKind::Tints => {
            steps(|factor| base.map_rgb(|c| (c + (1.0 - c) * factor).min(1.0)), "Tint")
        }
        VariationKind::Shades => {
            steps(|factor| base.map_rgb(|c| (c * (1.0 - factor)).max(0.0)), "Shade")
        }
        VariationKind::Complementary => complementary(base),
    })
}

fn steps(blend: impl Fn(f64) -> Color, label: &str) -> Vec<Swatch> {
    (1..=STEPS)
        .map(|i| Swatch::new(blend(i as f64 * STEP_FACTOR), format!("{label} {i}")))
        .collect()
}

fn complementary(base: Color) -> Vec<Swatch> {
    let hsl = rgba_to_hsl(base);
    [(180.0, "Complementary"), (30.0, "Analogous 1"), (-30.0, "Analogous 2")]
        .into_iter()
        .map(|(offset, name)| Swatch::new(hsl_to_rgba(hsl.rotate(offset)), name))
        .collect()
}
