//! Chat domain.
//!
//! - [`entities::ChatMessage`]: one turn shown in the assistant dialog
//! - [`log::MessageLog`]: ordered message history with update-by-id
//! - [`command::ChatCommand`]: recognizes the `/gambar` generation command
//! - [`media`]: staged photos, inline transport images and data URIs

pub mod command;
pub mod entities;
pub mod log;
pub mod media;
