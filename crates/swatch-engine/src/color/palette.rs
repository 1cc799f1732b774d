//! Brand palettes: named swatch collections applied across many targets.
//!
//! Storage of palettes belongs to the host; these are plain values.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::codec::to_hex;
use super::variation::Swatch;
use crate::paint::Color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandPalette {
    pub name: String,
    pub colors: Vec<Swatch>,
}

impl BrandPalette {
    pub fn new(name: impl Into<String>, colors: Vec<Swatch>) -> Self {
        Self { name: name.into(), colors }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for the `index`-th target, cycling through the palette.
    ///
    /// `None` for an empty palette.
    pub fn color_for(&self, index: usize) -> Option<Color> {
        if self.colors.is_empty() {
            return None;
        }
        Some(self.colors[index % self.colors.len()].rgba)
    }

    /// Colors for `count` targets in cyclic palette order.
    ///
    /// Empty when the palette has no colors.
    pub fn assign(&self, count: usize) -> Vec<Color> {
        (0..count).map_while(|i| self.color_for(i)).collect()
    }
}

/// Deduplicates colors by their hex form, keeping first-seen order.
///
/// Colors that differ only in alpha or below 8-bit precision collapse into one.
pub fn unique_by_hex(colors: impl IntoIterator<Item = Color>) -> Vec<Color> {
    let mut seen = HashSet::new();
    colors.into_iter().filter(|&c| seen.insert(to_hex(c))).collect()
}
