use serde::{Deserialize, Serialize};

use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `position` is expected in `[0, 1]`. Stop sequences are expected to be
/// non-empty with non-decreasing positions; equal positions produce a hard edge.
/// Nothing here sorts or clamps stops, see [`stops_are_valid`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: Color,
    pub position: f64,
}

impl GradientStop {
    #[inline]
    pub const fn new(color: Color, position: f64) -> Self {
        Self { color, position }
    }
}

/// Builds a stop list by pairing `colors` with `positions`, in order.
pub(crate) fn zip_stops(colors: &[Color], positions: &[f64]) -> Vec<GradientStop> {
    debug_assert_eq!(colors.len(), positions.len());
    colors
        .iter()
        .zip(positions)
        .map(|(&color, &position)| GradientStop::new(color, position))
        .collect()
}

/// True when `stops` is non-empty, finite, inside `[0, 1]` and non-decreasing.
pub fn stops_are_valid(stops: &[GradientStop]) -> bool {
    !stops.is_empty()
        && stops.iter().all(|s| {
            s.position.is_finite() && (0.0..=1.0).contains(&s.position) && s.color.is_finite()
        })
        && stops.windows(2).all(|w| w[0].position <= w[1].position)
}

/// Linear gradient along the axis `from` → `to` in normalized fill space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub stops: Vec<GradientStop>,
    pub from: Vec2,
    pub to: Vec2,
}

impl LinearGradient {
    pub fn new(stops: Vec<GradientStop>, from: Vec2, to: Vec2) -> Self {
        Self { stops, from, to }
    }

    /// Returns true when the gradient definition is structurally usable.
    ///
    /// Reports caller bugs; it never repairs them.
    pub fn is_valid(&self) -> bool {
        stops_are_valid(&self.stops)
            && self.from.is_finite()
            && self.to.is_finite()
            && (self.from.x != self.to.x || self.from.y != self.to.y)
    }
}

/// Radial gradient around `center`, reaching `radius` at position 1.
///
/// Semantics:
/// - `center` is a point in normalized fill space.
/// - `focal_offset` displaces the focal point from `center`; serialized as
///   `focalOffset`, the host's field name.
/// - `radius` is relative to the element's bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialGradient {
    pub stops: Vec<GradientStop>,
    pub center: Vec2,
    #[serde(rename = "focalOffset", default)]
    pub focal_offset: Vec2,
    pub radius: f64,
}

impl RadialGradient {
    /// Radial gradient whose focal point coincides with its center.
    pub fn centered(stops: Vec<GradientStop>, center: Vec2, radius: f64) -> Self {
        Self { stops, center, focal_offset: Vec2::zero(), radius }
    }

    /// Absolute focal point in fill space.
    #[inline]
    pub fn focal(&self) -> Vec2 {
        self.center + self.focal_offset
    }

    pub fn is_valid(&self) -> bool {
        stops_are_valid(&self.stops)
            && self.center.is_finite()
            && self.focal_offset.is_finite()
            && self.radius.is_finite()
            && self.radius > 0.0
    }
}
