//! Animate Image flow
//!
//! Drives the photo-to-video screen: key selection, photo and aspect ratio
//! choice, generation with rotating status messages, retry and start over.

use crate::config::TimingParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::credential_host::{CredentialError, CredentialHost};
use crate::ports::image_loader::{ImageLoadError, ImageLoader};
use crate::ports::media_store::MediaStore;
use crate::ports::progress::AnimationProgressNotifier;
use crate::ports::video_gateway::VideoGateway;
use crate::use_cases::generate_video::GenerateVideoUseCase;
use belajar_domain::{
    AnimationError, AnimationScreen, AnimationState, AspectRatio, GENERIC_FAILURE_MESSAGE,
    INVALID_KEY_MESSAGE, StatusRotation,
};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{Instant, interval_at};
use tracing::{info, warn};

/// Errors from user actions on the animation screen.
///
/// Generation failures are not errors here; they land in the state as
/// [`AnimationScreen::Failed`].
#[derive(Error, Debug)]
pub enum AnimationFlowError {
    #[error(transparent)]
    Animation(#[from] AnimationError),

    #[error(transparent)]
    Image(#[from] ImageLoadError),

    #[error(transparent)]
    Credential(#[from] CredentialError),
}

pub struct AnimationFlow<V, M, C, L>
where
    V: VideoGateway + 'static,
    M: MediaStore + 'static,
    C: CredentialHost + 'static,
    L: ImageLoader + 'static,
{
    video: GenerateVideoUseCase<V, M>,
    credentials: Arc<C>,
    images: Arc<L>,
    state: AnimationState,
    status_interval: Duration,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<V, M, C, L> AnimationFlow<V, M, C, L>
where
    V: VideoGateway + 'static,
    M: MediaStore + 'static,
    C: CredentialHost + 'static,
    L: ImageLoader + 'static,
{
    pub fn new(
        gateway: Arc<V>,
        store: Arc<M>,
        credentials: Arc<C>,
        images: Arc<L>,
        timing: TimingParams,
    ) -> Self {
        Self {
            video: GenerateVideoUseCase::new(gateway, store)
                .with_poll_interval(timing.poll_interval),
            credentials,
            images,
            state: AnimationState::new(),
            status_interval: timing.status_interval,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn screen(&self) -> AnimationScreen {
        self.state.screen()
    }

    /// Entry check: ask the host whether a key is already selected.
    pub async fn check_credentials(&mut self) -> AnimationScreen {
        if self.credentials.has_selected_key().await {
            self.state.mark_key_selected();
        }
        self.state.screen()
    }

    /// Prompt for a key.
    ///
    /// The flow is marked ready as soon as the prompt returns, whether or not
    /// a key was actually entered; a bad key only shows up at generation time.
    pub async fn select_key(&mut self) -> Result<AnimationScreen, AnimationFlowError> {
        self.credentials.open_select_key().await?;
        self.state.mark_key_selected();
        Ok(self.state.screen())
    }

    pub async fn choose_image(&mut self, path: &Path) -> Result<AnimationScreen, AnimationFlowError> {
        let file = self.images.load(path).await?;
        info!("Animation photo: {} ({})", file.name, file.mime_type);
        self.state.choose_image(file)?;
        Ok(self.state.screen())
    }

    pub fn choose_aspect_ratio(
        &mut self,
        ratio: AspectRatio,
    ) -> Result<AnimationScreen, AnimationFlowError> {
        self.state.choose_aspect_ratio(ratio)?;
        Ok(self.state.screen())
    }

    /// Generate the video, reporting rotating status messages meanwhile.
    ///
    /// Also used to retry after a failure.
    pub async fn generate(
        &mut self,
        progress: &dyn AnimationProgressNotifier,
    ) -> Result<AnimationScreen, AnimationFlowError> {
        let request = self.state.begin_generation()?;

        let mut rotation = StatusRotation::new();
        progress.on_generation_start(rotation.current());

        let period = self.status_interval.max(Duration::from_millis(1));
        let mut ticker = interval_at(Instant::now() + period, period);

        let result = {
            let job = self.video.execute_with_progress(&request, progress);
            tokio::pin!(job);
            loop {
                tokio::select! {
                    result = &mut job => break result,
                    _ = ticker.tick() => progress.on_status_message(rotation.advance()),
                }
            }
        };

        match result {
            Ok(video) => {
                info!("Video ready: {}", video.url);
                self.conversation_logger.log(ConversationEvent::new(
                    "video_generated",
                    json!({
                        "url": video.url,
                        "aspect_ratio": request.aspect_ratio.as_str(),
                    }),
                ));
                self.state.complete(video);
                progress.on_generation_end(true);
            }
            Err(e) => {
                warn!("Video generation failed: {}", e);
                let credential_rejected = e.is_credential_error();
                let message = if credential_rejected {
                    INVALID_KEY_MESSAGE
                } else {
                    GENERIC_FAILURE_MESSAGE
                };
                self.conversation_logger.log(ConversationEvent::new(
                    "request_failed",
                    json!({
                        "kind": "video",
                        "error": e.to_string(),
                        "credential_rejected": credential_rejected,
                    }),
                ));
                self.state.fail(message, credential_rejected);
                progress.on_generation_end(false);
            }
        }
        Ok(self.state.screen())
    }

    pub fn start_over(&mut self) -> AnimationScreen {
        self.state.start_over();
        self.state.screen()
    }
}
