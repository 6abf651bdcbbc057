//! Runtime configuration: optional JSON file plus command-line overrides.
//!
//! ```json
//! {
//!   "width": 1920,
//!   "height": 1080,
//!   "palette": { "foreground": "Gold", "background": "#101010" },
//!   "bound": "inclusive",
//!   "output": { "image": "out/primes.png", "summary": "out/primes.json" }
//! }
//! ```
//!
//! Every field is optional in the file; command-line values win.

use crate::color::Color;
use crate::render::Palette;
use crate::sieve::SieveBound;
use clap::{ArgAction, Parser};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "primewp.png";

#[derive(Debug, Parser)]
#[command(
    name = "primewp",
    version,
    about = "Paint the primes among 1..=W*H onto a W x H image",
    disable_version_flag = true
)]
pub struct Cli {
    /// Image width in pixels
    pub width: Option<usize>,

    /// Image height in pixels
    pub height: Option<usize>,

    /// Colour for prime cells (#RRGGBB or a web colour name)
    #[arg(short = 'f', long, value_name = "COLOR")]
    pub front: Option<Color>,

    /// Colour for non-prime cells (#RRGGBB or a web colour name)
    #[arg(short = 'b', long, value_name = "COLOR")]
    pub back: Option<Color>,

    /// Output PNG path [default: primewp.png]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Stop sieving at i*i < N instead of i*i <= N
    #[arg(long)]
    pub strict_bound: bool,

    /// Write a JSON summary of the generated grid
    #[arg(long, value_name = "PATH")]
    pub summary: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub image: Option<PathBuf>,
    pub summary: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub palette: Palette,
    pub bound: SieveBound,
    pub output: OutputConfig,
}

/// Fully resolved settings for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub palette: Palette,
    pub bound: SieveBound,
    pub image_out: PathBuf,
    pub summary_out: Option<PathBuf>,
}

impl RenderConfig {
    /// Loads the file named by `--config` (if any) and applies CLI overrides.
    pub fn from_cli(cli: &Cli) -> Result<Self, String> {
        let file = match &cli.config {
            Some(path) => load_config(path)?,
            None => FileConfig::default(),
        };
        Self::merge(file, cli)
    }

    pub fn merge(file: FileConfig, cli: &Cli) -> Result<Self, String> {
        let width = cli
            .width
            .or(file.width)
            .ok_or("Missing width (pass <WIDTH> or set \"width\" in the config)")?;
        let height = cli
            .height
            .or(file.height)
            .ok_or("Missing height (pass <HEIGHT> or set \"height\" in the config)")?;
        if width == 0 || height == 0 {
            return Err(format!("Invalid argument: size must be positive, got {width}x{height}"));
        }
        if u32::try_from(width).is_err() || u32::try_from(height).is_err() {
            return Err(format!("Invalid argument: {width}x{height} exceeds image limits"));
        }
        let palette = Palette {
            foreground: cli.front.unwrap_or(file.palette.foreground),
            background: cli.back.unwrap_or(file.palette.background),
        };
        let bound = if cli.strict_bound {
            SieveBound::Strict
        } else {
            file.bound
        };
        Ok(Self {
            width,
            height,
            palette,
            bound,
            image_out: cli
                .output
                .clone()
                .or(file.output.image)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            summary_out: cli.summary.clone().or(file.output.summary),
        })
    }
}

pub fn load_config(path: &Path) -> Result<FileConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("primewp").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn positional_size_with_defaults() {
        let cfg = RenderConfig::merge(FileConfig::default(), &cli(&["64", "48"])).unwrap();
        assert_eq!((cfg.width, cfg.height), (64, 48));
        assert_eq!(cfg.palette, Palette::default());
        assert_eq!(cfg.bound, SieveBound::Inclusive);
        assert_eq!(cfg.image_out, PathBuf::from(DEFAULT_OUTPUT));
        assert!(cfg.summary_out.is_none());
    }

    #[test]
    fn colour_flags_accept_codes_and_names() {
        let cfg = RenderConfig::merge(
            FileConfig::default(),
            &cli(&["-f", "Crimson", "-b", "#102030", "--strict-bound", "8", "8"]),
        )
        .unwrap();
        assert_eq!(cfg.palette.foreground, Color([0xDC, 0x14, 0x3C]));
        assert_eq!(cfg.palette.background, Color([0x10, 0x20, 0x30]));
        assert_eq!(cfg.bound, SieveBound::Strict);
    }

    #[test]
    fn bad_colour_is_a_parse_error() {
        let err = Cli::try_parse_from(["primewp", "-f", "Octarine", "4", "4"]).unwrap_err();
        assert!(err.to_string().contains("Octarine"));
    }

    #[test]
    fn non_numeric_size_is_a_parse_error() {
        assert!(Cli::try_parse_from(["primewp", "wide", "4"]).is_err());
        assert!(Cli::try_parse_from(["primewp", "-3", "4"]).is_err());
    }

    #[test]
    fn missing_or_zero_size_is_rejected() {
        assert!(RenderConfig::merge(FileConfig::default(), &cli(&[])).is_err());
        assert!(RenderConfig::merge(FileConfig::default(), &cli(&["5"])).is_err());
        assert!(RenderConfig::merge(FileConfig::default(), &cli(&["0", "5"])).is_err());
    }

    #[test]
    fn file_values_fill_gaps_and_cli_wins() {
        let file: FileConfig = serde_json::from_str(
            r##"{
                "width": 100,
                "height": 50,
                "palette": { "foreground": "Gold" },
                "bound": "strict",
                "output": { "image": "from_file.png", "summary": "s.json" }
            }"##,
        )
        .unwrap();
        let cfg = RenderConfig::merge(file, &cli(&["-o", "cli.png", "20"])).unwrap();
        assert_eq!((cfg.width, cfg.height), (20, 50));
        assert_eq!(cfg.palette.foreground, Color([0xFF, 0xD7, 0x00]));
        assert_eq!(cfg.palette.background, Color::BLACK);
        assert_eq!(cfg.bound, SieveBound::Strict);
        assert_eq!(cfg.image_out, PathBuf::from("cli.png"));
        assert_eq!(cfg.summary_out, Some(PathBuf::from("s.json")));
    }
}
