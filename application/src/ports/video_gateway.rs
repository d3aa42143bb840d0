//! Video Gateway port
//!
//! Long-running image-to-video jobs: submit, poll, download.

use crate::ports::ai_gateway::GatewayError;
use async_trait::async_trait;
use belajar_domain::VideoRequest;

/// Snapshot of a long-running video job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoOperation {
    /// Opaque job name used for polling
    pub name: String,
    /// Set once the job has finished
    pub done: bool,
    /// Download link of the first generated video, when finished
    pub video_uri: Option<String>,
}

impl VideoOperation {
    pub fn pending(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            done: false,
            video_uri: None,
        }
    }

    pub fn finished(name: impl Into<String>, video_uri: Option<String>) -> Self {
        Self {
            name: name.into(),
            done: true,
            video_uri,
        }
    }
}

/// Gateway for image-to-video generation
#[async_trait]
pub trait VideoGateway: Send + Sync {
    /// Submit a job for exactly one video.
    async fn submit(&self, request: &VideoRequest) -> Result<VideoOperation, GatewayError>;

    /// Fetch the current status of a job.
    async fn poll(&self, operation: &VideoOperation) -> Result<VideoOperation, GatewayError>;

    /// Fetch the bytes behind a finished job's download link.
    async fn download(&self, uri: &str) -> Result<Vec<u8>, GatewayError>;
}
