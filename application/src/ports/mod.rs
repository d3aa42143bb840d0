//! Port definitions (interfaces for external dependencies)
//!
//! Ports define the boundaries between the application layer and
//! infrastructure/presentation. Adapters implement these traits.

pub mod ai_gateway;
pub mod conversation_logger;
pub mod credential_host;
pub mod dialog_observer;
pub mod image_loader;
pub mod media_store;
pub mod progress;
pub mod video_gateway;
