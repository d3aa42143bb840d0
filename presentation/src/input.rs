//! Line input for the interactive screens

use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;
use std::path::Path;
use tracing::warn;

const HISTORY_CAPACITY: usize = 1000;

/// One read from the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A submitted line, trimmed
    Line(String),
    /// Ctrl-C
    Interrupted,
    /// Ctrl-D
    Eof,
}

/// Line editor shared by the portal, assistant and animation screens
pub struct LineReader {
    editor: Reedline,
}

impl LineReader {
    /// Editor with persistent history, or in-memory history when the file
    /// cannot be opened.
    pub fn with_history(path: &Path) -> Self {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let editor = match FileBackedHistory::with_file(HISTORY_CAPACITY, path.to_path_buf()) {
            Ok(history) => Reedline::create().with_history(Box::new(history)),
            Err(e) => {
                warn!("History file {} unavailable: {}", path.display(), e);
                Reedline::create()
            }
        };
        Self { editor }
    }

    /// Editor without any history file; used for the API key prompt.
    pub fn ephemeral() -> Self {
        Self {
            editor: Reedline::create(),
        }
    }

    pub fn read(&mut self, label: &str) -> io::Result<Input> {
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(label.to_string()),
            DefaultPromptSegment::Empty,
        );
        Ok(match self.editor.read_line(&prompt)? {
            Signal::Success(line) => Input::Line(line.trim().to_string()),
            Signal::CtrlC => Input::Interrupted,
            Signal::CtrlD => Input::Eof,
        })
    }
}
