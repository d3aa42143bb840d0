//! Assistant REPL input parsing
//!
//! Slash commands that are not REPL commands (including `/gambar`) are
//! passed through as messages.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantCommand {
    /// Stage a photo for the next message
    Attach(PathBuf),
    /// `/lampir` without a path
    AttachUsage,
    ClearAttachment,
    Close,
    Home,
    Help,
    Quit,
    /// Anything else goes through the send pipeline
    Message(String),
}

impl AssistantCommand {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let (head, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (trimmed, ""),
        };
        match head {
            "/lampir" if rest.is_empty() => AssistantCommand::AttachUsage,
            "/lampir" => AssistantCommand::Attach(PathBuf::from(rest)),
            "/hapus" => AssistantCommand::ClearAttachment,
            "/tutup" => AssistantCommand::Close,
            "/home" => AssistantCommand::Home,
            "/bantuan" | "/help" => AssistantCommand::Help,
            "/keluar" | "/quit" => AssistantCommand::Quit,
            _ => AssistantCommand::Message(input.to_string()),
        }
    }
}
