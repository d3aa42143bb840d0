//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into runtime parameters
//! where the rest of the workspace needs them.

use crate::gemini::client::GeminiSettings;
use belajar_application::TimingParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("poll_interval_secs cannot be 0")]
    InvalidPollInterval,

    #[error("model name cannot be empty ({0})")]
    EmptyModelName(&'static str),
}

/// Raw Gemini configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// API key; `GEMINI_API_KEY` / `API_KEY` are used when unset
    pub api_key: Option<String>,
    pub base_url: String,
    pub chat_model: String,
    pub image_model: String,
    pub video_model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub video_resolution: String,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            chat_model: "gemini-2.5-flash".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            video_model: "veo-3.1-fast-generate-preview".to_string(),
            temperature: 0.7,
            top_p: 0.9,
            video_resolution: "720p".to_string(),
        }
    }
}

impl FileGeminiConfig {
    /// Configured key, falling back to the environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .or_else(|| std::env::var("API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn to_settings(&self) -> GeminiSettings {
        GeminiSettings {
            base_url: self.base_url.clone(),
            chat_model: self.chat_model.clone(),
            image_model: self.image_model.clone(),
            video_model: self.video_model.clone(),
            temperature: self.temperature,
            top_p: self.top_p,
            video_resolution: self.video_resolution.clone(),
        }
    }
}

/// Raw timing configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTimingConfig {
    /// Seconds between video job status checks
    pub poll_interval_secs: u64,
    /// Seconds between rotating status messages
    pub status_interval_secs: u64,
}

impl Default for FileTimingConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 10,
            status_interval_secs: 5,
        }
    }
}

impl FileTimingConfig {
    pub fn to_params(&self) -> TimingParams {
        TimingParams::default()
            .with_poll_interval(Duration::from_secs(self.poll_interval_secs))
            .with_status_interval(Duration::from_secs(self.status_interval_secs))
    }
}

/// Raw media configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMediaConfig {
    /// Where generated videos and images are written
    pub output_dir: Option<PathBuf>,
}

impl FileMediaConfig {
    /// Configured directory, or `<data dir>/belajar-yuk/media`
    pub fn resolve_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("belajar-yuk")
                .join("media")
        })
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for daily-rolling diagnostic logs
    pub directory: Option<PathBuf>,
    /// JSONL transcript of assistant and animation events
    pub conversation_log: Option<PathBuf>,
}

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Path to history file
    pub history_file: Option<String>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub gemini: FileGeminiConfig,
    pub timing: FileTimingConfig,
    pub media: FileMediaConfig,
    pub logging: FileLoggingConfig,
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timing.poll_interval_secs == 0 {
            return Err(ConfigValidationError::InvalidPollInterval);
        }

        let models = [
            ("chat_model", &self.gemini.chat_model),
            ("image_model", &self.gemini.image_model),
            ("video_model", &self.gemini.video_model),
        ];
        for (field, model) in models {
            if model.trim().is_empty() {
                return Err(ConfigValidationError::EmptyModelName(field));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gemini]
api_key = "abc123"
chat_model = "gemini-2.5-pro"
temperature = 0.2

[timing]
poll_interval_secs = 3
status_interval_secs = 2

[media]
output_dir = "/tmp/belajar"

[logging]
conversation_log = "/tmp/belajar/transcript.jsonl"

[repl]
history_file = "~/.local/share/belajar-yuk/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.gemini.chat_model, "gemini-2.5-pro");
        assert!((config.gemini.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(config.timing.to_params().poll_interval, Duration::from_secs(3));
        assert_eq!(config.media.resolve_output_dir(), PathBuf::from("/tmp/belajar"));
        assert!(config.logging.directory.is_none());
        assert!(config.repl.history_file.is_some());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[gemini]
video_model = "veo-3.1-generate-preview"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.video_model, "veo-3.1-generate-preview");
        // Defaults should apply
        assert_eq!(config.gemini.chat_model, "gemini-2.5-flash");
        assert_eq!(config.gemini.video_resolution, "720p");
        assert_eq!(config.timing.poll_interval_secs, 10);
        assert_eq!(config.timing.status_interval_secs, 5);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_poll_interval() {
        let config: FileConfig = toml::from_str("[timing]\npoll_interval_secs = 0\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidPollInterval)
        ));
    }

    #[test]
    fn test_validate_empty_model_name() {
        let config: FileConfig = toml::from_str("[gemini]\nimage_model = \"  \"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyModelName("image_model"))
        ));
    }

    #[test]
    fn test_defaults_match_gateway_defaults() {
        assert_eq!(FileGeminiConfig::default().to_settings(), GeminiSettings::default());
    }

    #[test]
    fn test_configured_api_key_wins() {
        let config = FileGeminiConfig {
            api_key: Some("from-file".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("from-file"));
    }
}
