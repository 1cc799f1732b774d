//! Pattern descriptor → fill compilation.
//!
//! Stop layouts per kind (c1 = color1, c2 = color2):
//!
//! | kind      | geometry              | colors                        | positions
//! |-----------|-----------------------|-------------------------------|-----------------------------
//! | geometric | linear (0,0) → (1,1)  | c1 c2 c1 c2 c1                | 0 .25 .5 .75 1
//! | stripes   | linear (0,0) → (1,0)  | c1 c1 c2 c2 c1 c1 c2 c2 c1 c1 | 0 .2 .2 .4 .4 .6 .6 .8 .8 1
//! | dots      | radial (.5,.5), r .8  | c1 c2 c1 c2                   | 0 .3 .6 1
//! | waves     | linear (0,0) → (1,.3) | c1 c2 c1 c2 c1 c2 c1          | 0 .15 .3 .45 .6 .75 1
//! | hexagon   | radial (.5,.5), r .6  | c2 c1 c2 c1                   | 0 .4 .7 1
//! | noise     | linear, random axis   | 6 coin flips between c1 / c2  | 0 .2 .4 .6 .8 1

use crate::color::codec;
use crate::coords::Vec2;
use crate::error::PatternError;
use crate::paint::gradient::zip_stops;
use crate::paint::{Color, Fill, LinearGradient, RadialGradient};

use super::descriptor::{PatternDescriptor, PatternKind};
use super::random::{RandomSource, RngSource};

/// Positions used by every noise fill.
pub const NOISE_POSITIONS: [f64; 6] = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];

const CENTER: Vec2 = Vec2::new(0.5, 0.5);

/// Which of the two pattern colors sits at a stop.
#[derive(Copy, Clone)]
enum Slot {
    A,
    B,
}

use Slot::{A, B};

/// Compiles `descriptor` using a thread-local random source for the noise kind.
pub fn compile(descriptor: &PatternDescriptor) -> Result<Fill, PatternError> {
    compile_with(descriptor, &mut RngSource::thread())
}

/// Compiles `descriptor`, drawing any randomness from `rng`.
///
/// Both colors are resolved first; if either fails to parse the result is
/// [`PatternError::InvalidPatternColors`]. Unrecognized kinds resolve to a
/// solid fill of color1. Only [`PatternKind::Noise`] consumes `rng`.
pub fn compile_with(
    descriptor: &PatternDescriptor,
    rng: &mut dyn RandomSource,
) -> Result<Fill, PatternError> {
    let (c1, c2) = resolve_colors(descriptor)?;

    let Some(kind) = descriptor.pattern_kind() else {
        log::debug!(
            "pattern type {:?} not recognized, resolving to solid fill",
            descriptor.kind
        );
        return Ok(Fill::Solid(c1));
    };

    let pick = |slots: &[Slot]| -> Vec<Color> {
        slots
            .iter()
            .map(|s| match s {
                A => c1,
                B => c2,
            })
            .collect()
    };

    let fill = match kind {
        PatternKind::Geometric => linear(
            &pick(&[A, B, A, B, A]),
            &[0.0, 0.25, 0.5, 0.75, 1.0],
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
        ),
        PatternKind::Stripes => linear(
            &pick(&[A, A, B, B, A, A, B, B, A, A]),
            &[0.0, 0.2, 0.2, 0.4, 0.4, 0.6, 0.6, 0.8, 0.8, 1.0],
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
        ),
        PatternKind::Dots => radial(&pick(&[A, B, A, B]), &[0.0, 0.3, 0.6, 1.0], 0.8),
        PatternKind::Waves => linear(
            &pick(&[A, B, A, B, A, B, A]),
            &[0.0, 0.15, 0.3, 0.45, 0.6, 0.75, 1.0],
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.3),
        ),
        PatternKind::Hexagon => radial(&pick(&[B, A, B, A]), &[0.0, 0.4, 0.7, 1.0], 0.6),
        PatternKind::Noise => noise(c1, c2, rng),
    };

    log::trace!("compiled {} pattern into {} stops", kind.name(), fill.stops().len());
    Ok(fill)
}

fn resolve_colors(descriptor: &PatternDescriptor) -> Result<(Color, Color), PatternError> {
    match (codec::parse(&descriptor.color1), codec::parse(&descriptor.color2)) {
        (Ok(c1), Ok(c2)) => Ok((c1, c2)),
        (r1, r2) => Err(PatternError::InvalidPatternColors {
            color1: r1.err().map(|_| descriptor.color1.clone()),
            color2: r2.err().map(|_| descriptor.color2.clone()),
        }),
    }
}

fn linear(colors: &[Color], positions: &[f64], from: Vec2, to: Vec2) -> Fill {
    Fill::Linear(LinearGradient::new(zip_stops(colors, positions), from, to))
}

fn radial(colors: &[Color], positions: &[f64], radius: f64) -> Fill {
    Fill::Radial(RadialGradient::centered(zip_stops(colors, positions), CENTER, radius))
}

/// Six stops on [`NOISE_POSITIONS`], each color1 when the draw is below 0.5 and
/// color2 otherwise, followed by four draws for the axis endpoints
/// (`from.x`, `from.y`, `to.x`, `to.y`).
///
/// The endpoints are not forced apart; two equal draws give a degenerate axis.
fn noise(c1: Color, c2: Color, rng: &mut dyn RandomSource) -> Fill {
    let colors: Vec<Color> = NOISE_POSITIONS
        .iter()
        .map(|_| if rng.next_f64() < 0.5 { c1 } else { c2 })
        .collect();
    let from = Vec2::new(rng.next_f64(), rng.next_f64());
    let to = Vec2::new(rng.next_f64(), rng.next_f64());
    linear(&colors, &NOISE_POSITIONS, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::stops_are_valid;
    use crate::pattern::random::SequenceSource;

    fn desc(kind: &str) -> PatternDescriptor {
        PatternDescriptor::new(kind, "#000000", "#ffffff", 10.0)
    }

    fn positions(fill: &Fill) -> Vec<f64> {
        fill.stops().iter().map(|s| s.position).collect()
    }

    fn hexes(fill: &Fill) -> Vec<String> {
        fill.stops().iter().map(|s| codec::to_hex(s.color)).collect()
    }

    const K: &str = "#000000";
    const W: &str = "#ffffff";

    // ── fixed layouts ─────────────────────────────────────────────────────

    #[test]
    fn stripes_layout() {
        let fill = compile(&desc("stripes")).unwrap();
        assert_eq!(positions(&fill), [0.0, 0.2, 0.2, 0.4, 0.4, 0.6, 0.6, 0.8, 0.8, 1.0]);
        assert_eq!(hexes(&fill), [K, K, W, W, K, K, W, W, K, K]);
        let Fill::Linear(g) = fill else { panic!("expected linear fill") };
        assert_eq!((g.from, g.to), (Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)));
        assert!(g.is_valid());
    }

    #[test]
    fn geometric_layout() {
        let fill = compile(&desc("geometric")).unwrap();
        assert_eq!(positions(&fill), [0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(hexes(&fill), [K, W, K, W, K]);
        let Fill::Linear(g) = fill else { panic!("expected linear fill") };
        assert_eq!(g.to, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn waves_layout() {
        let fill = compile(&desc("waves")).unwrap();
        assert_eq!(positions(&fill), [0.0, 0.15, 0.3, 0.45, 0.6, 0.75, 1.0]);
        assert_eq!(hexes(&fill), [K, W, K, W, K, W, K]);
        let Fill::Linear(g) = fill else { panic!("expected linear fill") };
        assert_eq!((g.from, g.to), (Vec2::zero(), Vec2::new(1.0, 0.3)));
    }

    #[test]
    fn dots_layout() {
        let fill = compile(&desc("dots")).unwrap();
        assert_eq!(positions(&fill), [0.0, 0.3, 0.6, 1.0]);
        assert_eq!(hexes(&fill), [K, W, K, W]);
        let Fill::Radial(g) = fill else { panic!("expected radial fill") };
        assert_eq!(g.center, Vec2::new(0.5, 0.5));
        assert_eq!(g.focal_offset, Vec2::zero());
        assert_eq!(g.radius, 0.8);
    }

    #[test]
    fn hexagon_starts_with_color2() {
        let fill = compile(&desc("hexagon")).unwrap();
        assert_eq!(positions(&fill), [0.0, 0.4, 0.7, 1.0]);
        assert_eq!(hexes(&fill), [W, K, W, K]);
        let Fill::Radial(g) = fill else { panic!("expected radial fill") };
        assert_eq!(g.radius, 0.6);
    }

    #[test]
    fn fixed_layouts_ignore_the_random_source() {
        for &kind in PatternKind::all().iter().filter(|k| !k.is_random()) {
            let a = compile_with(&desc(kind.name()), &mut SequenceSource::new([0.1])).unwrap();
            let b = compile_with(&desc(kind.name()), &mut SequenceSource::new([0.9])).unwrap();
            assert_eq!(a, b, "{}", kind.name());
        }
    }

    #[test]
    fn every_layout_is_structurally_valid() {
        // six color draws, then from = (0.2, 0.3), to = (0.8, 0.9)
        let draws = [0.1, 0.7, 0.1, 0.7, 0.1, 0.7, 0.2, 0.3, 0.8, 0.9];
        for &kind in PatternKind::all() {
            let mut rng = SequenceSource::new(draws);
            let fill = compile_with(&desc(kind.name()), &mut rng).unwrap();
            let ok = match &fill {
                Fill::Linear(g) => g.is_valid(),
                Fill::Radial(g) => g.is_valid(),
                Fill::Solid(_) => false,
            };
            assert!(ok, "{}", kind.name());
        }
    }

    // ── noise ─────────────────────────────────────────────────────────────

    #[test]
    fn noise_structure_with_real_randomness() {
        for _ in 0..32 {
            let fill = compile(&desc("noise")).unwrap();
            assert_eq!(positions(&fill), NOISE_POSITIONS);
            assert!(hexes(&fill).iter().all(|h| h == K || h == W));
            let Fill::Linear(g) = fill else { panic!("expected linear fill") };
            assert!(g.from.is_normalized() && g.to.is_normalized());
        }
    }

    #[test]
    fn noise_allows_a_degenerate_axis() {
        // a two-value cycle hands the same point to both endpoints
        let fill = compile_with(&desc("noise"), &mut SequenceSource::new([0.1, 0.7])).unwrap();
        let Fill::Linear(g) = fill else { panic!("expected linear fill") };
        assert_eq!(g.from, g.to);
        assert!(stops_are_valid(&g.stops));
        assert!(!g.is_valid());
    }

    #[test]
    fn noise_with_injected_sequence() {
        let mut rng =
            SequenceSource::new([0.1, 0.6, 0.49, 0.5, 0.0, 0.99, 0.25, 0.75, 0.125, 0.875]);
        let fill = compile_with(&desc("noise"), &mut rng).unwrap();
        assert_eq!(hexes(&fill), [K, W, K, W, K, W]);
        let Fill::Linear(g) = fill else { panic!("expected linear fill") };
        assert_eq!(g.from, Vec2::new(0.25, 0.75));
        assert_eq!(g.to, Vec2::new(0.125, 0.875));
    }

    // ── resolution ────────────────────────────────────────────────────────

    #[test]
    fn unknown_kind_is_solid_color1() {
        let d = PatternDescriptor::new("unknown", "red", "#ffffff", 10.0);
        assert_eq!(compile(&d).unwrap(), Fill::Solid(Color::new(1.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn kind_match_is_case_sensitive() {
        let d = PatternDescriptor::new("Stripes", "red", "blue", 10.0);
        assert_eq!(compile(&d).unwrap(), Fill::Solid(Color::new(1.0, 0.0, 0.0, 1.0)));
        assert!(!compile(&desc("STRIPES")).unwrap().is_gradient());
    }

    #[test]
    fn bad_color_fails_even_for_unknown_kind() {
        let d = PatternDescriptor::new("unknown", "red", "chartreuse", 10.0);
        assert_eq!(
            compile(&d).unwrap_err(),
            PatternError::InvalidPatternColors {
                color1: None,
                color2: Some("chartreuse".to_string()),
            }
        );
    }

    #[test]
    fn both_bad_colors_are_reported() {
        let d = PatternDescriptor::new("dots", "#abc", "nope", 10.0);
        assert_eq!(
            compile(&d).unwrap_err(),
            PatternError::InvalidPatternColors {
                color1: Some("#abc".to_string()),
                color2: Some("nope".to_string()),
            }
        );
    }

    #[test]
    fn named_colors_resolve_in_patterns() {
        let d = PatternDescriptor::new("dots", "Blue", "yellow", 30.0);
        let fill = compile(&d).unwrap();
        assert_eq!(fill.stops()[0].color, Color::rgb(0.0, 0.0, 1.0));
        assert_eq!(fill.stops()[1].color, Color::rgb(1.0, 1.0, 0.0));
    }
}
