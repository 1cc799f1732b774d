use clap::{Parser, Subcommand};

/// Color and pattern workbench for the swatch engine.
#[derive(Debug, Parser)]
#[command(name = "swatch", version)]
pub struct Cli {
    /// Log filter in env_logger syntax (overrides RUST_LOG).
    #[arg(long, global = true)]
    pub log: Option<String>,

    /// Print results as JSON in the host API's shape.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Parse a color token (name or #rrggbb).
    Parse { token: String },

    /// Show the HSL form of a color token.
    Hsl { token: String },

    /// Derive tints, shades or complementary colors.
    Variations {
        color: String,
        /// tints | shades | complementary
        #[arg(default_value = "tints")]
        kind: String,
    },

    /// Compile a pattern descriptor into a fill.
    Pattern {
        /// geometric | stripes | dots | waves | hexagon | noise
        kind: String,
        #[arg(default_value = "#007acc")]
        color1: String,
        #[arg(default_value = "#ffffff")]
        color2: String,
        #[arg(long, default_value_t = 30.0)]
        scale: f64,
        /// Seed for the noise pattern's random source.
        #[arg(long)]
        seed: Option<u64>,
        /// Fail instead of falling back to a solid fill on bad colors.
        #[arg(long)]
        strict: bool,
    },

    /// List the recognized color names.
    Names,

    /// Build a brand palette and cycle it across a number of targets.
    Palette {
        name: String,
        /// Color tokens; entries with the same hex are kept once.
        #[arg(required = true)]
        colors: Vec<String>,
        /// How many targets to assign palette colors to.
        #[arg(long, default_value_t = 0)]
        targets: usize,
    },
}
