//! Configuration file loading for belajar-yuk
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `BELAJAR_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./belajar.toml` or `./.belajar.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/belajar-yuk/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGeminiConfig, FileLoggingConfig, FileMediaConfig,
    FileReplConfig, FileTimingConfig,
};
pub use loader::ConfigLoader;
