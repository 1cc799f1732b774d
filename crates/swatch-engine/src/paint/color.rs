use serde::{Deserialize, Serialize};

use crate::error::{Channel, ColorError};

/// Straight-alpha RGBA color.
///
/// Invariant:
/// - every channel is finite and lies in `[0, 1]` for colors produced by this crate.
///
/// Colors built with [`Color::new`] from caller input are not checked; run them
/// through [`Color::validate`] before handing them to operations that require a
/// valid color.
///
/// Serialized with the host API's field names (`red`, `green`, `blue`, `alpha`).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    #[serde(rename = "red")]
    pub r: f64,
    #[serde(rename = "green")]
    pub g: f64,
    #[serde(rename = "blue")]
    pub b: f64,
    #[serde(rename = "alpha", default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Color {
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color; alpha defaults to 1 for sources that carry no alpha.
    #[inline]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Creates an opaque color from sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// Returns the color unchanged when all channels are finite and in `[0, 1]`.
    ///
    /// Fails with [`ColorError::InvalidColor`] naming the first offending channel.
    /// Input is never clamped.
    pub fn validate(self) -> Result<Self, ColorError> {
        let channels = [
            (Channel::Red, self.r),
            (Channel::Green, self.g),
            (Channel::Blue, self.b),
            (Channel::Alpha, self.a),
        ];
        for (channel, value) in channels {
            if !(0.0..=1.0).contains(&value) {
                return Err(ColorError::InvalidColor { channel, value });
            }
        }
        Ok(self)
    }

    /// Applies `f` to the red, green and blue channels, keeping alpha.
    #[inline]
    pub fn map_rgb(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b), self.a)
    }

    #[inline]
    pub fn max_channel(self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    #[inline]
    pub fn min_channel(self) -> f64 {
        self.r.min(self.g).min(self.b)
    }

    /// Channel-wise comparison within `tolerance`, alpha included.
    pub fn approx_eq(self, other: Color, tolerance: f64) -> bool {
        (self.r - other.r).abs() <= tolerance
            && (self.g - other.g).abs() <= tolerance
            && (self.b - other.b).abs() <= tolerance
            && (self.a - other.a).abs() <= tolerance
    }
}
