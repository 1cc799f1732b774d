//! Color engine: token codec, HSL conversion and palette derivation.
//!
//! ```text
//! "#007acc" / "red"
//!     │
//!     ▼
//! codec.rs:     token → Color, Color → "#rrggbb"
//!     │
//!     ▼
//! hsl.rs:       Color ⇄ Hsl
//!     │
//!     ▼
//! variation.rs: tints / shades / complementary swatches
//! ```

pub mod codec;
pub mod hsl;
pub mod palette;
pub mod variation;

pub use codec::{named_color, parse, to_hex, NAMED_COLORS};
pub use hsl::{hsl_to_rgba, hsl_to_rgba_with_alpha, rgba_to_hsl, Hsl};
pub use palette::{unique_by_hex, BrandPalette};
pub use variation::{generate, Swatch, VariationKind};
