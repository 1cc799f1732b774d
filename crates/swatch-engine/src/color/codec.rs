//! Color tokens: named colors and `#rrggbb` hex literals.
//!
//! Only 6-digit hex is accepted. Shorthand (`#abc`) and alpha-carrying
//! (`#rrggbbaa`) forms are rejected rather than guessed at.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::paint::Color;

/// Fixed table of recognized color names. Every entry is opaque.
pub const NAMED_COLORS: &[(&str, Color)] = &[
    ("red", Color::rgb(1.0, 0.0, 0.0)),
    ("blue", Color::rgb(0.0, 0.0, 1.0)),
    ("green", Color::rgb(0.0, 1.0, 0.0)),
    ("yellow", Color::rgb(1.0, 1.0, 0.0)),
    ("purple", Color::rgb(0.5, 0.0, 0.5)),
    ("orange", Color::rgb(1.0, 0.5, 0.0)),
    ("pink", Color::rgb(1.0, 0.75, 0.8)),
    ("gray", Color::rgb(0.5, 0.5, 0.5)),
];

/// Looks up a color name, ignoring ASCII case.
pub fn named_color(name: &str) -> Option<Color> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, c)| c)
}

/// Parses a color token.
///
/// Matching order:
/// 1. case-insensitive name lookup in [`NAMED_COLORS`]
/// 2. `#` followed by exactly six hex digits, alpha = 1
///
/// Anything else is [`ColorError::UnrecognizedColor`].
pub fn parse(token: &str) -> Result<Color, ColorError> {
    if let Some(c) = named_color(token) {
        return Ok(c);
    }
    token
        .strip_prefix('#')
        .and_then(parse_hex6)
        .ok_or_else(|| ColorError::unrecognized(token))
}

fn parse_hex6(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::from_u8(byte(0)?, byte(2)?, byte(4)?))
}

/// Formats a color as lower-case `#rrggbb`.
///
/// Lossy: alpha is dropped and channels are quantized with `round(v * 255)`.
/// Out-of-range channels saturate at `00` / `ff`.
pub fn to_hex(color: Color) -> String {
    let q = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", q(color.r), q(color.g), q(color.b))
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_hex(*self))
    }
}
