use std::path::PathBuf;

use clap::Parser;

/// Gradient Labs: layered CSS gradients and matching PNG exports.
#[derive(Parser, Debug)]
#[command(name = "gradlab", version, about)]
pub struct Args {
    /// Start from a built-in preset (case-insensitive name).
    #[arg(short, long, conflicts_with = "file")]
    pub preset: Option<String>,

    /// Load a gradient description from a TOML file.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Randomize colors, stops, angle and pattern.
    #[arg(short, long)]
    pub random: bool,

    /// Seed for --random, for reproducible output.
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Also write a PNG export to the configured output directory.
    #[arg(long)]
    pub png: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the preset names and exit.
    #[arg(long)]
    pub list_presets: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_invocation() {
        let args = Args::try_parse_from([
            "gradlab", "--preset", "neon", "--random", "--seed", "7", "--png",
        ])
        .unwrap();
        assert_eq!(args.preset.as_deref(), Some("neon"));
        assert!(args.random && args.png);
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn preset_and_file_conflict() {
        assert!(Args::try_parse_from(["gradlab", "--preset", "neon", "--file", "a.toml"]).is_err());
    }

    #[test]
    fn seed_requires_random() {
        assert!(Args::try_parse_from(["gradlab", "--seed", "1"]).is_err());
    }
}
