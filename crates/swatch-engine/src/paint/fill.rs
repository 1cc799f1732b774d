use serde::{Deserialize, Serialize};

use super::{Color, GradientStop, LinearGradient, RadialGradient};

/// Fill source handed to the host's fill-construction calls.
///
/// Serialized with a `kind` tag (`solid`, `linear`, `radial`) so the host glue
/// can dispatch to its solid-color or gradient-fill constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Fill {
    Solid(Color),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Fill {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Fill::Solid(color)
    }

    /// Stops of a gradient fill; empty for solid fills.
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Fill::Solid(_) => &[],
            Fill::Linear(g) => &g.stops,
            Fill::Radial(g) => &g.stops,
        }
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Fill::Solid(c) => c.is_opaque(),
            Fill::Linear(_) | Fill::Radial(_) => self.stops().iter().all(|s| s.color.is_opaque()),
        }
    }

    pub fn is_gradient(&self) -> bool {
        !matches!(self, Fill::Solid(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    #[test]
    fn solid_has_no_stops() {
        assert!(Fill::solid(Color::white()).stops().is_empty());
    }

    #[test]
    fn gradient_opacity_follows_stops() {
        let translucent = Color::new(0.0, 0.0, 0.0, 0.5);
        let fill = Fill::Linear(LinearGradient::new(
            vec![GradientStop::new(Color::white(), 0.0), GradientStop::new(translucent, 1.0)],
            Vec2::zero(),
            Vec2::new(1.0, 0.0),
        ));
        assert!(!fill.is_opaque());
        assert!(Fill::solid(Color::black()).is_opaque());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let radial = Fill::Radial(RadialGradient::centered(
            vec![GradientStop::new(Color::black(), 0.0)],
            Vec2::new(0.5, 0.5),
            0.6,
        ));
        let json = serde_json::to_value(&radial).unwrap();
        assert_eq!(json["kind"], "radial");
        assert_eq!(json["radius"], 0.6);
        assert_eq!(json["center"], serde_json::json!({ "x": 0.5, "y": 0.5 }));
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["center", "focalOffset", "kind", "radius", "stops"]);

        let solid = serde_json::to_value(Fill::solid(Color::white())).unwrap();
        assert_eq!(solid["kind"], "solid");
        assert_eq!(solid["red"], 1.0);
    }
}
