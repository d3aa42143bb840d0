//! Error types for the Gemini adapter

use belajar_application::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Response fragments that mean the key was rejected
const CREDENTIAL_SIGNATURES: [&str; 3] = [
    "Requested entity was not found",
    "API key not valid",
    "API_KEY_INVALID",
];

/// Whether an error body says the credential was rejected
pub fn is_credential_rejection(body: &str) -> bool {
    CREDENTIAL_SIGNATURES.iter().any(|sig| body.contains(sig))
}

/// Errors that can occur when calling the Gemini REST API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("No API key selected")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Failed to download video (HTTP {status}): {body}")]
    Download { status: u16, body: String },

    #[error("Operation failed: {0}")]
    Operation(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl From<GeminiError> for GatewayError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::MissingApiKey => {
                GatewayError::InvalidCredential("No API key selected".to_string())
            }
            GeminiError::Api { ref body, .. } | GeminiError::Operation(ref body)
                if is_credential_rejection(body) =>
            {
                GatewayError::InvalidCredential(body.clone())
            }
            GeminiError::Download { status, body } => {
                if is_credential_rejection(&body) {
                    GatewayError::InvalidCredential(body)
                } else {
                    GatewayError::DownloadFailed { status, body }
                }
            }
            other => GatewayError::TransportFailure(other.to_string()),
        }
    }
}
