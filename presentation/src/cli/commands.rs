//! CLI command definitions

use belajar_domain::{AspectRatio, Level};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for belajar-yuk
#[derive(Parser, Debug)]
#[command(name = "belajar-yuk")]
#[command(author, version, about = "Belajar Yuk! - learning portal with Fadel, an AI study assistant")]
#[command(long_about = r#"
Belajar Yuk! is a terminal learning portal for Indonesian primary (SD) and
lower-secondary (SMP) students.

Pick a level, a grade and a subject, read the lesson, and ask Fadel (an AI
study assistant powered by Gemini) anything. Fadel can read photos of your
homework and draw pictures with `/gambar <description>`. The animation screen
turns a photo into a short video.

Configuration files are loaded from (in priority order):
1. BELAJAR_* environment variables
2. --config <path>     Explicit config file
3. ./belajar.toml      Project-level config
4. ~/.config/belajar-yuk/config.toml   Global config

The API key is read from [gemini] api_key, GEMINI_API_KEY or API_KEY.

Example:
  belajar-yuk
  belajar-yuk --level SD --grade 4 --subject pjok "Bagaimana cara lari estafet?"
  belajar-yuk --animate --image foto.jpg --ratio 9:16
"#)]
pub struct Cli {
    /// Ask Fadel one question and exit (opens the portal when omitted)
    pub question: Option<String>,

    /// Education level for the question (SD or SMP)
    #[arg(long, value_name = "LEVEL")]
    pub level: Option<Level>,

    /// Grade for SD (1-6)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=6))]
    pub grade: Option<u8>,

    /// Subject id, e.g. `bahasa-indonesia` or `pjok`
    #[arg(long, value_name = "ID")]
    pub subject: Option<String>,

    /// Open the photo animation screen directly
    #[arg(short, long)]
    pub animate: bool,

    /// Photo to animate (with --animate)
    #[arg(long, value_name = "PATH", requires = "animate")]
    pub image: Option<PathBuf>,

    /// Video aspect ratio (with --animate)
    #[arg(long, value_name = "RATIO", requires = "animate")]
    pub ratio: Option<AspectRatio>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
