//! Streaming console view of the assistant dialog

use crate::output::ConsoleFormatter;
use belajar_application::DialogObserver;
use belajar_domain::{ChatMessage, MessageId, Role};
use std::io::{self, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
struct StreamCursor {
    id: Option<MessageId>,
    printed: bool,
}

/// Prints dialog messages as they change.
///
/// User messages are not echoed. An empty assistant placeholder starts a
/// streamed line that deltas are appended to.
pub struct ConsoleDialogView<W: Write + Send = Stdout> {
    out: Mutex<W>,
    stream: Mutex<StreamCursor>,
    muted: AtomicBool,
}

impl ConsoleDialogView<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleDialogView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            stream: Mutex::new(StreamCursor::default()),
            muted: AtomicBool::new(false),
        }
    }

    /// Suppress output, e.g. the greeting in one-shot mode
    pub fn set_muted(&self, muted: bool) {
        self.muted.store(muted, Ordering::SeqCst);
    }

    /// End the streamed line, if one is open
    pub fn finish_stream(&self) {
        let cursor = std::mem::take(&mut *self.stream.lock().unwrap_or_else(PoisonError::into_inner));
        if cursor.id.is_some() {
            self.write("\n");
        }
    }

    fn write(&self, text: &str) {
        if self.muted.load(Ordering::SeqCst) {
            return;
        }
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }
}

impl<W: Write + Send> DialogObserver for ConsoleDialogView<W> {
    fn on_message_added(&self, message: &ChatMessage) {
        if message.role == Role::User {
            return;
        }
        if message.is_assistant() && message.text.is_empty() {
            *self.stream.lock().unwrap_or_else(PoisonError::into_inner) = StreamCursor {
                id: Some(message.id),
                printed: false,
            };
            self.write(&ConsoleFormatter::speaker(Role::Assistant));
            return;
        }
        self.write(&format!("{}\n", ConsoleFormatter::format_message(message)));
    }

    fn on_message_delta(&self, id: MessageId, chunk: &str) {
        {
            let mut cursor = self.stream.lock().unwrap_or_else(PoisonError::into_inner);
            if cursor.id != Some(id) {
                return;
            }
            cursor.printed = true;
        }
        self.write(chunk);
    }

    fn on_message_updated(&self, message: &ChatMessage) {
        let streamed = {
            let mut cursor = self.stream.lock().unwrap_or_else(PoisonError::into_inner);
            if cursor.id == Some(message.id) {
                Some(std::mem::take(&mut *cursor).printed)
            } else {
                None
            }
        };
        match streamed {
            // Replaced after partial output (an apology): start a fresh line.
            Some(true) => self.write(&format!(
                "\n{}\n",
                ConsoleFormatter::format_message(message)
            )),
            Some(false) => self.write(&format!("{}\n", message.text)),
            None => self.write(&format!("{}\n", ConsoleFormatter::format_message(message))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(view: &ConsoleDialogView<Vec<u8>>) -> String {
        String::from_utf8(view.out.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn test_streamed_reply_on_one_line() {
        let view = ConsoleDialogView::new(Vec::new());
        view.on_message_added(&ChatMessage::user(MessageId(1), "Pertanyaanku"));
        view.on_message_added(&ChatMessage::assistant(MessageId(2), ""));
        view.on_message_delta(MessageId(2), "Hal");
        view.on_message_delta(MessageId(2), "o!");
        view.finish_stream();

        let text = output(&view);
        assert!(!text.contains("Pertanyaanku"));
        assert!(text.contains("Halo!\n"));
    }

    #[test]
    fn test_deltas_for_other_messages_ignored() {
        let view = ConsoleDialogView::new(Vec::new());
        view.on_message_added(&ChatMessage::assistant(MessageId(2), ""));
        view.on_message_delta(MessageId(9), "bocor");
        assert!(!output(&view).contains("bocor"));
    }

    #[test]
    fn test_completed_only_text_printed_once() {
        let view = ConsoleDialogView::new(Vec::new());
        view.on_message_added(&ChatMessage::assistant(MessageId(2), ""));
        view.on_message_updated(&ChatMessage::assistant(MessageId(2), "Jawaban lengkap"));
        view.finish_stream();

        let text = output(&view);
        assert_eq!(text.matches("Jawaban lengkap").count(), 1);
        assert!(text.ends_with("Jawaban lengkap\n"));
    }

    #[test]
    fn test_muted_view_prints_nothing() {
        let view = ConsoleDialogView::new(Vec::new());
        view.set_muted(true);
        view.on_message_added(&ChatMessage::assistant(MessageId(1), "Halo! Aku Fadel."));
        assert!(output(&view).is_empty());
    }
}
