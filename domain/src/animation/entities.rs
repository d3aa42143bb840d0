//! Animation entities and state machine

use crate::chat::media::{ImageFile, InlineImage, StagedImage};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown when generation fails for any reason other than a bad key
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Terjadi kesalahan saat membuat video. Silakan coba lagi.";

/// Shown when the service rejected the credential
pub const INVALID_KEY_MESSAGE: &str = "Kunci API tidak valid. Silakan pilih kunci API yang benar.";

/// Supported output aspect ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 2] = [AspectRatio::Landscape, AspectRatio::Portrait];

    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Landscape => "16:9",
            AspectRatio::Portrait => "9:16",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Landscape => "16:9 Landscape",
            AspectRatio::Portrait => "9:16 Portrait",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AspectRatio {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "16:9" | "landscape" => Ok(AspectRatio::Landscape),
            "9:16" | "portrait" => Ok(AspectRatio::Portrait),
            other => Err(DomainError::InvalidAspectRatio(other.to_string())),
        }
    }
}

/// One image-to-video job request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRequest {
    pub image: InlineImage,
    pub aspect_ratio: AspectRatio,
}

/// Where a finished video can be played from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayableVideo {
    pub url: String,
}

/// Rejected animation transitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    #[error("Select an API key first")]
    MissingApiKey,

    #[error("Choose an image first")]
    MissingImage,

    #[error("Choose an aspect ratio first")]
    MissingAspectRatio,

    #[error("A video is already being generated")]
    AlreadyGenerating,

    #[error("The video is finished; start over to make another")]
    AlreadyFinished,
}

/// Job phase
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    #[default]
    Idle,
    Generating,
    Succeeded(PlayableVideo),
    Failed(String),
}

/// What the animation screen shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationScreen {
    NeedsApiKey,
    Upload,
    ChooseRatio,
    ReadyToGenerate,
    Generating,
    Succeeded,
    Failed,
}

/// State of one animation screen instance (Entity)
#[derive(Debug, Clone, Default)]
pub struct AnimationState {
    key_selected: bool,
    image: Option<StagedImage>,
    aspect_ratio: Option<AspectRatio>,
    phase: AnimationPhase,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_key_selected(&self) -> bool {
        self.key_selected
    }

    pub fn image(&self) -> Option<&StagedImage> {
        self.image.as_ref()
    }

    pub fn aspect_ratio(&self) -> Option<AspectRatio> {
        self.aspect_ratio
    }

    pub fn phase(&self) -> &AnimationPhase {
        &self.phase
    }

    pub fn screen(&self) -> AnimationScreen {
        if !self.key_selected {
            return AnimationScreen::NeedsApiKey;
        }
        match self.phase {
            AnimationPhase::Generating => AnimationScreen::Generating,
            AnimationPhase::Failed(_) => AnimationScreen::Failed,
            AnimationPhase::Succeeded(_) => AnimationScreen::Succeeded,
            AnimationPhase::Idle => match (&self.image, self.aspect_ratio) {
                (None, _) => AnimationScreen::Upload,
                (Some(_), None) => AnimationScreen::ChooseRatio,
                (Some(_), Some(_)) => AnimationScreen::ReadyToGenerate,
            },
        }
    }

    /// Mark a credential as selected and clear any shown error.
    pub fn mark_key_selected(&mut self) {
        self.key_selected = true;
        if matches!(self.phase, AnimationPhase::Failed(_)) {
            self.phase = AnimationPhase::Idle;
        }
    }

    pub fn choose_image(&mut self, file: ImageFile) -> Result<(), AnimationError> {
        self.ensure_not_generating()?;
        self.image = Some(StagedImage::from(file));
        Ok(())
    }

    pub fn choose_aspect_ratio(&mut self, ratio: AspectRatio) -> Result<(), AnimationError> {
        self.ensure_not_generating()?;
        self.aspect_ratio = Some(ratio);
        Ok(())
    }

    /// Whether the generate action is enabled
    pub fn can_generate(&self) -> bool {
        self.validate().is_ok()
    }

    /// Enter `Generating` and build the request. Valid from idle and from a failure (retry).
    pub fn begin_generation(&mut self) -> Result<VideoRequest, AnimationError> {
        let request = self.validate()?;
        self.phase = AnimationPhase::Generating;
        Ok(request)
    }

    pub fn complete(&mut self, video: PlayableVideo) {
        self.phase = AnimationPhase::Succeeded(video);
    }

    /// Record a failure; a credential failure also drops the key selection.
    pub fn fail(&mut self, message: impl Into<String>, credential_rejected: bool) {
        if credential_rejected {
            self.key_selected = false;
        }
        self.phase = AnimationPhase::Failed(message.into());
    }

    /// Back to idle, keeping only the key selection.
    pub fn start_over(&mut self) {
        self.image = None;
        self.aspect_ratio = None;
        self.phase = AnimationPhase::Idle;
    }

    fn ensure_not_generating(&self) -> Result<(), AnimationError> {
        if self.phase == AnimationPhase::Generating {
            return Err(AnimationError::AlreadyGenerating);
        }
        Ok(())
    }

    fn validate(&self) -> Result<VideoRequest, AnimationError> {
        match self.phase {
            AnimationPhase::Generating => return Err(AnimationError::AlreadyGenerating),
            AnimationPhase::Succeeded(_) => return Err(AnimationError::AlreadyFinished),
            AnimationPhase::Idle | AnimationPhase::Failed(_) => {}
        }
        if !self.key_selected {
            return Err(AnimationError::MissingApiKey);
        }
        let image = self.image.as_ref().ok_or(AnimationError::MissingImage)?;
        let aspect_ratio = self.aspect_ratio.ok_or(AnimationError::MissingAspectRatio)?;
        Ok(VideoRequest {
            image: image.file.to_inline(),
            aspect_ratio,
        })
    }
}
