//! Swatch engine crate.
//!
//! Pure color and pattern functions for a design-tool host:
//!
//! - [`color`]: parse `#rrggbb` / named tokens, convert RGBA ⇄ HSL, derive
//!   tints, shades and complementary swatches
//! - [`pattern`]: compile a pattern descriptor into a linear or radial gradient
//! - [`paint`]: the `Color` / `Fill` values handed to the host's fill calls
//!
//! No function here holds state between calls. The noise pattern is the only
//! nondeterministic output and takes its randomness from an injectable
//! [`pattern::RandomSource`].
//!
//! ```rust
//! use swatch_engine::pattern::{compile, PatternDescriptor};
//!
//! let fill = compile(&PatternDescriptor::new("stripes", "#000000", "#ffffff", 10.0)).unwrap();
//! assert_eq!(fill.stops().len(), 10);
//! ```

pub mod color;
pub mod coords;
pub mod error;
pub mod logging;
pub mod paint;
pub mod pattern;

pub use error::{ColorError, PatternError};
