//! Infrastructure layer for belajar-yuk
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;
pub mod media;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGeminiConfig, FileLoggingConfig,
    FileMediaConfig, FileReplConfig, FileTimingConfig,
};
pub use gemini::{
    client::GeminiSettings,
    credentials::ApiKeyStore,
    error::{GeminiError, is_credential_rejection},
    gateway::GeminiGateway,
    session::GeminiSession,
};
pub use logging::JsonlConversationLogger;
pub use media::{LocalImageReader, LocalMediaStore};
