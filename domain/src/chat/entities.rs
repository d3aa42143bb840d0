//! Chat entities

use serde::{Deserialize, Serialize};

/// Identifier of a chat message, unique for the lifetime of a dialog controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "msg-{}", self.0)
    }
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// A message in the assistant dialog (Entity)
///
/// Assistant messages start as placeholders and are mutated in place as
/// results arrive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: Role,
    pub text: String,
    /// Displayable image reference (data URI or file URL)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ChatMessage {
    pub fn user(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::User,
            text: text.into(),
            image: None,
        }
    }

    pub fn assistant(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::Assistant,
            text: text.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let msg = ChatMessage::assistant(MessageId(1), "Halo");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "assistant");
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_with_image() {
        let msg = ChatMessage::user(MessageId(2), "lihat").with_image(Some("data:x".into()));
        assert_eq!(msg.image.as_deref(), Some("data:x"));
        assert!(!msg.is_assistant());
    }
}
