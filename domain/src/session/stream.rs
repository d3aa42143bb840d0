//! Streaming events for tutor session replies.
//!
//! [`StreamEvent`] represents individual events in a streaming reply, so the
//! dialog can show the answer while it is still being typed.

/// An event in a streaming tutor reply.
///
/// Bridges transport-level streaming (server-sent events from the chat
/// service) to the application layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A text chunk, appended to the reply in arrival order.
    Delta(String),
    /// The complete reply text (signals stream end).
    Completed(String),
    /// An error that occurred during streaming (signals stream end).
    Error(String),
}

impl StreamEvent {
    /// Returns the text content if this is a Delta or Completed event.
    pub fn text(&self) -> Option<&str> {
        match self {
            StreamEvent::Delta(s) | StreamEvent::Completed(s) => Some(s),
            StreamEvent::Error(_) => None,
        }
    }

    /// Returns true if this event signals the end of the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamEvent::Completed(_) | StreamEvent::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_text_returns_content() {
        let event = StreamEvent::Delta("Hal".to_string());
        assert_eq!(event.text(), Some("Hal"));
        assert!(!event.is_terminal());
    }

    #[test]
    fn completed_text_returns_content_and_is_terminal() {
        let event = StreamEvent::Completed("Halo! Aku Fadel.".to_string());
        assert_eq!(event.text(), Some("Halo! Aku Fadel."));
        assert!(event.is_terminal());
    }

    #[test]
    fn error_text_returns_none_and_is_terminal() {
        let event = StreamEvent::Error("oops".to_string());
        assert_eq!(event.text(), None);
        assert!(event.is_terminal());
    }
}
