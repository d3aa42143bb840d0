//! AI Gateway port
//!
//! Defines the interface for talking to the generative-AI service: contextual
//! tutor chat sessions and still image generation.

use async_trait::async_trait;
use belajar_domain::{ImageDataUri, InlineImage, StreamEvent};
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur during gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Chat session not started")]
    SessionNotStarted,

    #[error("No image data found in the response")]
    NoImageReturned,

    #[error("Video generation failed: no download link found")]
    NoDownloadLink,

    #[error("Requested entity was not found. Your API key may be invalid or missing permissions: {0}")]
    InvalidCredential(String),

    #[error("Failed to download video (HTTP {status}): {body}")]
    DownloadFailed { status: u16, body: String },

    #[error("Transport failure: {0}")]
    TransportFailure(String),

    #[error("Operation cancelled")]
    Cancelled,
}

impl GatewayError {
    /// Whether retrying can only succeed after a new credential is selected
    pub fn is_credential_error(&self) -> bool {
        matches!(self, GatewayError::InvalidCredential(_))
    }
}

/// Gateway for tutor chat and image generation
///
/// Implementations (adapters) live in the infrastructure layer. The gateway
/// itself is stateless; conversation state lives in the returned session.
#[async_trait]
pub trait AiGateway: Send + Sync {
    /// Open a new contextual chat session bound to `system_instruction`.
    async fn start_session(
        &self,
        system_instruction: &str,
    ) -> Result<Box<dyn TutorSession>, GatewayError>;

    /// Generate one still image; returns it as a PNG data URI.
    async fn generate_image(&self, prompt: &str) -> Result<ImageDataUri, GatewayError>;
}

/// Handle for receiving streaming events from a tutor session.
#[derive(Debug)]
pub struct StreamHandle {
    pub receiver: mpsc::Receiver<StreamEvent>,
}

impl StreamHandle {
    pub fn new(receiver: mpsc::Receiver<StreamEvent>) -> Self {
        Self { receiver }
    }
}

/// An active tutor chat session
///
/// A session keeps its own conversation history; sends on one session must
/// not interleave.
#[async_trait]
pub trait TutorSession: Send + Sync {
    /// Send a user turn (text plus at most one inline image) and stream the reply.
    async fn send_streaming(
        &self,
        text: &str,
        image: Option<InlineImage>,
    ) -> Result<StreamHandle, GatewayError>;
}
