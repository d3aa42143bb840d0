//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const APP_DIR: &str = "belajar-yuk";
const PROJECT_FILES: [&str; 2] = ["belajar.toml", ".belajar.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `BELAJAR_` environment variables (`BELAJAR_GEMINI__CHAT_MODEL`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./belajar.toml` or `./.belajar.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/belajar-yuk/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("BELAJAR_").split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Default REPL history location
    pub fn default_history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(APP_DIR).join("history.txt"))
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Environment: BELAJAR_* (e.g. BELAJAR_GEMINI__API_KEY)");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./belajar.toml or ./.belajar.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.gemini.chat_model, "gemini-2.5-flash");
        assert_eq!(config.timing.poll_interval_secs, 10);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("belajar-yuk"));
    }

    #[test]
    fn test_explicit_path_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[gemini]\nvideo_model = \"veo-test\"\n\n[timing]\nstatus_interval_secs = 1").unwrap();

        let config = ConfigLoader::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(config.gemini.video_model, "veo-test");
        assert_eq!(config.timing.status_interval_secs, 1);
        assert_eq!(config.gemini.image_model, "gemini-2.5-flash-image");
    }

    #[test]
    fn test_invalid_value_is_reported() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[timing]\npoll_interval_secs = \"soon\"").unwrap();
        assert!(ConfigLoader::load(Some(&file.path().to_path_buf())).is_err());
    }
}
