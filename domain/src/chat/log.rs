//! Ordered message history

use super::entities::{ChatMessage, MessageId};

/// Message history of one dialog opening.
///
/// Insertion order is display order. Updates target a message by id and are
/// silently dropped when the message no longer exists (e.g. after a reset).
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<ChatMessage>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Apply `update` to the message with `id` if it still exists.
    ///
    /// Returns whether a message was updated.
    pub fn update<F>(&mut self, id: MessageId, update: F) -> bool
    where
        F: FnOnce(&mut ChatMessage),
    {
        match self.messages.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                update(message);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: MessageId) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
