//! Application layer for belajar-yuk
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::TimingParams;
pub use ports::{
    ai_gateway::{AiGateway, GatewayError, StreamHandle, TutorSession},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    credential_host::{CredentialError, CredentialHost},
    dialog_observer::{DialogObserver, NoDialogObserver},
    image_loader::{ImageLoadError, ImageLoader},
    media_store::{MediaKind, MediaStore, MediaStoreError, StoredMedia},
    progress::{AnimationProgressNotifier, NoAnimationProgress},
    video_gateway::{VideoGateway, VideoOperation},
};
pub use use_cases::animate_image::{AnimationFlow, AnimationFlowError};
pub use use_cases::assistant_dialog::{AssistantDialog, DialogError, DialogPhase, SendOutcome};
pub use use_cases::generate_video::{GenerateVideoError, GenerateVideoUseCase};
