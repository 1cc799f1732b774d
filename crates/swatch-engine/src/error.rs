use thiserror::Error;

/// Failure raised while reading or validating a color.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// The token is neither a known color name nor a `#rrggbb` literal.
    #[error("unrecognized color {token:?}")]
    UnrecognizedColor { token: String },

    /// A channel supplied directly is outside `[0, 1]` or not finite.
    #[error("invalid color: {channel} channel is {value}, expected a value in [0, 1]")]
    InvalidColor { channel: Channel, value: f64 },
}

impl ColorError {
    pub(crate) fn unrecognized(token: impl Into<String>) -> Self {
        Self::UnrecognizedColor { token: token.into() }
    }
}

/// Failure raised by the pattern compiler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// One or both pattern colors failed to parse.
    ///
    /// Each field holds the original token when that color failed, `None` when it parsed.
    #[error(
        "invalid pattern colors (color1: {}, color2: {})",
        describe(.color1),
        describe(.color2)
    )]
    InvalidPatternColors {
        color1: Option<String>,
        color2: Option<String>,
    },
}

fn describe(token: &Option<String>) -> String {
    match token {
        Some(t) => format!("{t:?} unrecognized"),
        None => "ok".to_string(),
    }
}

/// Names a color channel in error reports.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    pub const fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
