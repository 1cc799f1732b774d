//! Caller-side fallback policy for pattern fills.
//!
//! The compiler itself never falls back. Hosts that prefer painting something
//! over surfacing [`PatternError`](crate::error::PatternError) use these helpers.

use crate::color::codec;
use crate::error::PatternError;
use crate::paint::{Color, Fill};

use super::compiler::compile_with;
use super::descriptor::PatternDescriptor;
use super::random::RandomSource;

/// Solid color to paint when a pattern cannot be compiled.
///
/// color1 if it parses, else color2 if it parses, else `None`.
pub fn solid_fallback(descriptor: &PatternDescriptor) -> Option<Color> {
    codec::parse(&descriptor.color1)
        .or_else(|_| codec::parse(&descriptor.color2))
        .ok()
}

/// Outcome of [`compile_or_solid`].
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// The descriptor compiled as-is.
    Compiled(Fill),
    /// Compilation failed with `error`; `fill` is the solid substitute.
    Substituted { fill: Fill, error: PatternError },
}

impl Resolved {
    pub fn fill(&self) -> &Fill {
        match self {
            Resolved::Compiled(fill) | Resolved::Substituted { fill, .. } => fill,
        }
    }

    pub fn into_fill(self) -> Fill {
        match self {
            Resolved::Compiled(fill) | Resolved::Substituted { fill, .. } => fill,
        }
    }

    #[inline]
    pub fn is_substituted(&self) -> bool {
        matches!(self, Resolved::Substituted { .. })
    }
}

/// Compiles `descriptor`, substituting [`solid_fallback`] on failure.
///
/// Fails with the compiler's error only when neither color parses.
pub fn compile_or_solid(
    descriptor: &PatternDescriptor,
    rng: &mut dyn RandomSource,
) -> Result<Resolved, PatternError> {
    match compile_with(descriptor, rng) {
        Ok(fill) => Ok(Resolved::Compiled(fill)),
        Err(error) => match solid_fallback(descriptor) {
            Some(color) => Ok(Resolved::Substituted { fill: Fill::Solid(color), error }),
            None => Err(error),
        },
    }
}
