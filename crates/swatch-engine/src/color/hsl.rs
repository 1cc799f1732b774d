//! RGBA ⇄ HSL conversion.

use serde::{Deserialize, Serialize};

use crate::paint::Color;

/// Hue / saturation / lightness.
///
/// `hue` is in degrees and wraps; conversions normalize it into `[0, 360)`.
/// `saturation` and `lightness` are in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    #[inline]
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self { hue, saturation, lightness }
    }

    /// Same saturation and lightness, hue rotated by `degrees` and wrapped to `[0, 360)`.
    #[inline]
    pub fn rotate(self, degrees: f64) -> Self {
        Self { hue: wrap_degrees(self.hue + degrees), ..self }
    }
}

/// Wraps an angle into `[0, 360)`.
#[inline]
pub fn wrap_degrees(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Converts a color to HSL. Alpha is ignored.
///
/// Achromatic colors (all channels equal) get hue 0 and saturation 0.
pub fn rgba_to_hsl(color: Color) -> Hsl {
    let Color { r, g, b, .. } = color;
    let max = color.max_channel();
    let min = color.min_channel();
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(wrap_degrees((h / 6.0).rem_euclid(1.0) * 360.0), s, l)
}

/// Converts HSL back to an opaque color.
pub fn hsl_to_rgba(hsl: Hsl) -> Color {
    hsl_to_rgba_with_alpha(hsl, 1.0)
}

/// Converts HSL to a color carrying the given `alpha`.
pub fn hsl_to_rgba_with_alpha(hsl: Hsl, alpha: f64) -> Color {
    let Hsl { saturation: s, lightness: l, .. } = hsl;

    if s == 0.0 {
        return Color::new(l, l, l, alpha);
    }

    let h = wrap_degrees(hsl.hue) / 360.0;
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Color::new(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
        alpha,
    )
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
