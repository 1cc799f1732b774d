//! Coordinate types shared by gradient geometry.
//!
//! Canonical fill space:
//! - Normalized to the filled element's bounds, `[0, 1] x [0, 1]`
//! - Origin top-left
//! - +X right, +Y down

mod vec2;

pub use vec2::Vec2;
