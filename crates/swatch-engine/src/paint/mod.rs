//! Paint model handed across the host boundary.
//!
//! Scope:
//! - color representation (straight alpha, channels in `[0, 1]`)
//! - fill sources (solid, linear and radial gradients)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod fill;
pub mod gradient;

pub use color::Color;
pub use fill::Fill;
pub use gradient::{stops_are_valid, GradientStop, LinearGradient, RadialGradient};
