//! Generate Video use case
//!
//! Submits an image-to-video job, polls it until done, downloads the result
//! and stores it where it can be played locally.

use crate::ports::ai_gateway::GatewayError;
use crate::ports::media_store::{MediaKind, MediaStore, MediaStoreError};
use crate::ports::progress::{AnimationProgressNotifier, NoAnimationProgress};
use crate::ports::video_gateway::VideoGateway;
use belajar_domain::{PlayableVideo, VideoRequest};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Errors that can occur while generating a video
#[derive(Error, Debug)]
pub enum GenerateVideoError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Could not save the video: {0}")]
    Store(#[from] MediaStoreError),
}

impl GenerateVideoError {
    pub fn is_credential_error(&self) -> bool {
        matches!(self, GenerateVideoError::Gateway(e) if e.is_credential_error())
    }
}

/// Use case for one image-to-video job
pub struct GenerateVideoUseCase<V: VideoGateway + 'static, M: MediaStore + 'static> {
    gateway: Arc<V>,
    store: Arc<M>,
    poll_interval: Duration,
    cancellation_token: Option<CancellationToken>,
}

impl<V: VideoGateway + 'static, M: MediaStore + 'static> GenerateVideoUseCase<V, M> {
    pub fn new(gateway: Arc<V>, store: Arc<M>) -> Self {
        Self {
            gateway,
            store,
            poll_interval: Duration::from_secs(10),
            cancellation_token: None,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Stop polling when `token` is cancelled. Checked between polls only.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, request: &VideoRequest) -> Result<PlayableVideo, GenerateVideoError> {
        self.execute_with_progress(request, &NoAnimationProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        request: &VideoRequest,
        progress: &dyn AnimationProgressNotifier,
    ) -> Result<PlayableVideo, GenerateVideoError> {
        info!(
            "Submitting video job ({}, {})",
            request.aspect_ratio, request.image.mime_type
        );
        let mut operation = self.gateway.submit(request).await?;

        let mut attempt = 0u32;
        while !operation.done {
            self.wait_for_next_poll().await?;
            operation = self.gateway.poll(&operation).await?;
            attempt += 1;
            debug!(
                "Video job {} poll #{}: done={}",
                operation.name, attempt, operation.done
            );
            progress.on_poll(attempt, operation.done);
        }

        let uri = operation
            .video_uri
            .as_deref()
            .ok_or(GatewayError::NoDownloadLink)?;
        let bytes = self.gateway.download(uri).await?;
        info!("Downloaded video ({} bytes)", bytes.len());

        let stored = self.store.store(MediaKind::Video, &bytes).await?;
        Ok(PlayableVideo { url: stored.url })
    }

    async fn wait_for_next_poll(&self) -> Result<(), GatewayError> {
        match &self.cancellation_token {
            Some(token) => {
                tokio::select! {
                    _ = token.cancelled() => Err(GatewayError::Cancelled),
                    _ = tokio::time::sleep(self.poll_interval) => Ok(()),
                }
            }
            None => {
                tokio::time::sleep(self.poll_interval).await;
                Ok(())
            }
        }
    }
}
