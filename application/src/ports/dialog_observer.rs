//! Dialog observer port
//!
//! Lets the presentation layer render the assistant dialog as it changes,
//! including streamed text as it arrives.

use belajar_domain::{ChatMessage, MessageId};

/// Callback for assistant dialog changes
///
/// Called after the dialog state has been updated, never while it is locked.
pub trait DialogObserver: Send + Sync {
    /// A message was appended to the history
    fn on_message_added(&self, message: &ChatMessage);

    /// Text was appended to a streaming assistant message
    fn on_message_delta(&self, _id: MessageId, _chunk: &str) {}

    /// A message was rewritten (final image result or apology)
    fn on_message_updated(&self, message: &ChatMessage);
}

/// No-op observer
pub struct NoDialogObserver;

impl DialogObserver for NoDialogObserver {
    fn on_message_added(&self, _message: &ChatMessage) {}
    fn on_message_updated(&self, _message: &ChatMessage) {}
}
