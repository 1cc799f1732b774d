//! `swatch` — command-line host for the swatch engine.
//!
//! Plays the part of the host glue: reads raw user input, calls the engine,
//! applies the fallback policy for pattern fills and prints the result.

mod cli;

use std::fmt::Write as _;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde_json::json;

use swatch_engine::color::{self, BrandPalette, Swatch, VariationKind, NAMED_COLORS};
use swatch_engine::logging::{init_logging, LoggingConfig};
use swatch_engine::paint::{Fill, GradientStop};
use swatch_engine::pattern::{self, PatternDescriptor, RandomSource, Resolved, RngSource};

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    let out = run(&cli.command, cli.json)?;
    println!("{out}");
    Ok(())
}

fn run(command: &Command, as_json: bool) -> Result<String> {
    match command {
        Command::Parse { token } => {
            let c = color::parse(token)?;
            Ok(if as_json {
                json!({ "hex": color::to_hex(c), "rgba": c }).to_string()
            } else {
                format!(
                    "{}  rgba({:.4}, {:.4}, {:.4}, {:.4})",
                    color::to_hex(c),
                    c.r,
                    c.g,
                    c.b,
                    c.a
                )
            })
        }

        Command::Hsl { token } => {
            let hsl = color::rgba_to_hsl(color::parse(token)?);
            Ok(if as_json {
                serde_json::to_string(&hsl)?
            } else {
                format!(
                    "hsl({:.2}, {:.2}%, {:.2}%)",
                    hsl.hue,
                    hsl.saturation * 100.0,
                    hsl.lightness * 100.0
                )
            })
        }

        Command::Variations { color: token, kind } => {
            let kind = VariationKind::from_name(kind)
                .ok_or_else(|| anyhow!("unknown variation kind {kind:?}"))?;
            let base = color::parse(token)?;
            let swatches = color::generate(base, kind)
                .with_context(|| format!("deriving {} from {token}", kind.name()))?;
            Ok(if as_json {
                serde_json::to_string_pretty(&swatches)?
            } else {
                render_swatches(&swatches)
            })
        }

        Command::Pattern { kind, color1, color2, scale, seed, strict } => {
            let descriptor =
                PatternDescriptor::new(kind.as_str(), color1.as_str(), color2.as_str(), *scale);
            let fill = compile_pattern(&descriptor, *seed, *strict)?;
            Ok(if as_json {
                serde_json::to_string_pretty(&fill)?
            } else {
                render_fill(&fill)
            })
        }

        Command::Names => {
            let entries: Vec<Swatch> = NAMED_COLORS
                .iter()
                .map(|&(name, c)| Swatch::new(c, name))
                .collect();
            Ok(if as_json {
                serde_json::to_string_pretty(&entries)?
            } else {
                render_swatches(&entries)
            })
        }

        Command::Palette { name, colors, targets } => {
            let palette = build_palette(name, colors)?;
            let assigned: Vec<String> =
                palette.assign(*targets).into_iter().map(color::to_hex).collect();
            Ok(if as_json {
                serde_json::to_string_pretty(&json!({ "palette": palette, "assigned": assigned }))?
            } else {
                render_palette(&palette, &assigned)
            })
        }
    }
}

fn build_palette(name: &str, tokens: &[String]) -> Result<BrandPalette> {
    let parsed = tokens
        .iter()
        .map(|t| color::parse(t).with_context(|| format!("palette {name:?}")))
        .collect::<Result<Vec<_>>>()?;
    let swatches = color::unique_by_hex(parsed)
        .into_iter()
        .enumerate()
        .map(|(i, c)| Swatch::new(c, format!("{name} {}", i + 1)))
        .collect();
    Ok(BrandPalette::new(name, swatches))
}

fn compile_pattern(
    descriptor: &PatternDescriptor,
    seed: Option<u64>,
    strict: bool,
) -> Result<Fill> {
    let mut rng: Box<dyn RandomSource> = match seed {
        Some(s) => Box::new(RngSource::seeded(s)),
        None => Box::new(RngSource::thread()),
    };

    if strict {
        return pattern::compile_with(descriptor, rng.as_mut()).context("compiling pattern");
    }

    let resolved = pattern::compile_or_solid(descriptor, rng.as_mut())
        .context("no usable color for a fallback fill")?;
    if let Resolved::Substituted { fill: Fill::Solid(c), error } = &resolved {
        log::warn!("{error}; falling back to solid {}", color::to_hex(*c));
    }
    Ok(resolved.into_fill())
}

fn render_swatches(swatches: &[Swatch]) -> String {
    let mut s = String::new();
    for sw in swatches {
        let _ = writeln!(s, "{:<14} {}", sw.name, sw.hex);
    }
    s.trim_end().to_string()
}

fn render_palette(palette: &BrandPalette, assigned: &[String]) -> String {
    let mut s = render_swatches(&palette.colors);
    for (i, hex) in assigned.iter().enumerate() {
        let _ = write!(s, "\ntarget {i:<7} {hex}");
    }
    s
}

fn render_stops(s: &mut String, stops: &[GradientStop]) {
    for stop in stops {
        let _ = writeln!(s, "  {:.2}  {}", stop.position, color::to_hex(stop.color));
    }
}

fn render_fill(fill: &Fill) -> String {
    let mut s = String::new();
    match fill {
        Fill::Solid(c) => {
            let _ = write!(s, "solid {}", color::to_hex(*c));
        }
        Fill::Linear(g) => {
            let _ = writeln!(
                s,
                "linear ({:.3}, {:.3}) -> ({:.3}, {:.3})",
                g.from.x, g.from.y, g.to.x, g.to.y
            );
            render_stops(&mut s, &g.stops);
        }
        Fill::Radial(g) => {
            let _ = writeln!(
                s,
                "radial center ({:.3}, {:.3}) radius {:.3}",
                g.center.x, g.center.y, g.radius
            );
            render_stops(&mut s, &g.stops);
        }
    }
    s.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(kind: &str, c1: &str, c2: &str, strict: bool) -> Command {
        Command::Pattern {
            kind: kind.into(),
            color1: c1.into(),
            color2: c2.into(),
            scale: 10.0,
            seed: Some(1),
            strict,
        }
    }

    #[test]
    fn parse_prints_hex_and_channels() {
        let out = run(&Command::Parse { token: "red".into() }, false).unwrap();
        assert_eq!(out, "#ff0000  rgba(1.0000, 0.0000, 0.0000, 1.0000)");
    }

    #[test]
    fn parse_json_shape() {
        let out = run(&Command::Parse { token: "#007acc".into() }, true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["hex"], "#007acc");
        assert_eq!(v["rgba"]["alpha"], 1.0);
    }

    #[test]
    fn unknown_token_is_an_error() {
        let err = run(&Command::Parse { token: "notacolor".into() }, false).unwrap_err();
        assert!(err.to_string().contains("notacolor"));
    }

    #[test]
    fn hsl_of_blue() {
        let out = run(&Command::Hsl { token: "blue".into() }, false).unwrap();
        assert_eq!(out, "hsl(240.00, 100.00%, 50.00%)");
    }

    #[test]
    fn variations_text_lists_each_swatch() {
        let cmd = Command::Variations { color: "black".into(), kind: "tints".into() };
        // "black" is not a named color
        assert!(run(&cmd, false).is_err());

        let cmd = Command::Variations { color: "#000000".into(), kind: "tints".into() };
        let out = run(&cmd, false).unwrap();
        assert_eq!(out.lines().count(), 5);
        assert!(out.starts_with("Tint 1"));
        assert!(out.lines().next().unwrap().ends_with("#262626"));
    }

    #[test]
    fn unknown_variation_kind_is_an_error() {
        let cmd = Command::Variations { color: "red".into(), kind: "tones".into() };
        assert!(run(&cmd, false).is_err());
    }

    #[test]
    fn stripes_render() {
        let out = run(&pattern("stripes", "#000000", "#ffffff", false), false).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("linear (0.000, 0.000) -> (1.000, 0.000)"));
        assert_eq!(lines.count(), 10);
    }

    #[test]
    fn seeded_noise_is_reproducible() {
        let a = run(&pattern("noise", "red", "blue", false), true).unwrap();
        let b = run(&pattern("noise", "red", "blue", false), true).unwrap();
        assert_eq!(a, b);
        let v: serde_json::Value = serde_json::from_str(&a).unwrap();
        assert_eq!(v["kind"], "linear");
        assert_eq!(v["stops"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn bad_pattern_color_falls_back_to_solid() {
        let out = run(&pattern("dots", "nope", "blue", false), false).unwrap();
        assert_eq!(out, "solid #0000ff");
    }

    #[test]
    fn strict_mode_surfaces_pattern_errors() {
        assert!(run(&pattern("dots", "nope", "blue", true), false).is_err());
    }

    #[test]
    fn no_fallback_when_both_colors_are_bad() {
        assert!(run(&pattern("dots", "nope", "nada", false), false).is_err());
    }

    #[test]
    fn fallback_keeps_the_compiler_error_as_context() {
        let err = run(&pattern("dots", "nope", "nada", false), false).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("no usable color"));
        assert!(chain.contains("\"nada\" unrecognized"));
    }

    #[test]
    fn palette_dedups_and_cycles() {
        let cmd = Command::Palette {
            name: "brand".into(),
            colors: vec!["red".into(), "#FF0000".into(), "blue".into()],
            targets: 3,
        };
        let out = run(&cmd, false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("brand 1") && lines[0].ends_with("#ff0000"));
        assert!(lines[1].starts_with("brand 2") && lines[1].ends_with("#0000ff"));
        assert!(lines[4].starts_with("target 2") && lines[4].ends_with("#ff0000"));
    }

    #[test]
    fn palette_json_shape() {
        let cmd = Command::Palette {
            name: "brand".into(),
            colors: vec!["#007acc".into()],
            targets: 2,
        };
        let v: serde_json::Value = serde_json::from_str(&run(&cmd, true).unwrap()).unwrap();
        assert_eq!(v["palette"]["name"], "brand");
        assert_eq!(v["palette"]["colors"][0]["hex"], "#007acc");
        assert_eq!(v["assigned"], serde_json::json!(["#007acc", "#007acc"]));
    }

    #[test]
    fn palette_rejects_bad_tokens() {
        let cmd = Command::Palette {
            name: "brand".into(),
            colors: vec!["red".into(), "chartreuse".into()],
            targets: 1,
        };
        assert!(run(&cmd, false).is_err());
    }

    #[test]
    fn names_lists_table() {
        let out = run(&Command::Names, false).unwrap();
        assert_eq!(out.lines().count(), NAMED_COLORS.len());
        assert!(out.contains("gray"));
    }
}
