use serde::{Deserialize, Serialize};

/// Procedural pattern families with a fixed gradient layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// Diagonal alternating bands.
    Geometric,
    /// Hard-edged vertical stripes.
    Stripes,
    /// Radial rings around the center.
    Dots,
    /// Shallow diagonal ripples.
    Waves,
    /// Radial rings, color2 at the center.
    Hexagon,
    /// Randomized stops along a random axis.
    Noise,
}

impl PatternKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Geometric => "geometric",
            Self::Stripes => "stripes",
            Self::Dots => "dots",
            Self::Waves => "waves",
            Self::Hexagon => "hexagon",
            Self::Noise => "noise",
        }
    }

    /// Parse a pattern kind from its exact lower-case name.
    ///
    /// Host type strings are matched verbatim; `"Stripes"` is not a kind.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().find(|k| k.name() == name).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Geometric,
            Self::Stripes,
            Self::Dots,
            Self::Waves,
            Self::Hexagon,
            Self::Noise,
        ]
    }

    /// True for the only kind whose output depends on a random source.
    #[must_use]
    pub const fn is_random(self) -> bool {
        matches!(self, Self::Noise)
    }
}

/// Abstract description of a procedural fill, as received from the host.
///
/// `kind` is kept as the raw type string so that unrecognized types can still
/// be compiled (they resolve to a solid fill). `scale` is carried for the
/// caller's preview rendering and does not affect gradient layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    pub color1: String,
    pub color2: String,
    pub scale: f64,
}

impl PatternDescriptor {
    pub fn new(
        kind: impl Into<String>,
        color1: impl Into<String>,
        color2: impl Into<String>,
        scale: f64,
    ) -> Self {
        Self {
            kind: kind.into(),
            color1: color1.into(),
            color2: color2.into(),
            scale,
        }
    }

    /// Resolved pattern kind, `None` when the type string is unrecognized.
    #[inline]
    pub fn pattern_kind(&self) -> Option<PatternKind> {
        PatternKind::from_name(&self.kind)
    }
}
