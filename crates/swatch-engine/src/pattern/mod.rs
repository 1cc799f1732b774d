//! Procedural pattern compiler.
//!
//! Turns a [`PatternDescriptor`] (type, two color tokens, scale) into a
//! [`Fill`](crate::paint::Fill) with a fixed stop layout per pattern kind.

pub mod compiler;
pub mod descriptor;
pub mod fallback;
pub mod random;

pub use compiler::{compile, compile_with, NOISE_POSITIONS};
pub use descriptor::{PatternDescriptor, PatternKind};
pub use fallback::{compile_or_solid, solid_fallback, Resolved};
pub use random::{RandomSource, RngSource, SequenceSource};
