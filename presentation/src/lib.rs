//! Presentation layer for belajar-yuk
//!
//! This crate contains the CLI definition, console rendering, the progress
//! spinner and the interactive screens: the learning portal, the chat with
//! Fadel and the photo animation screen.

pub mod animate;
pub mod chat;
pub mod cli;
pub mod credentials;
pub mod input;
pub mod output;
pub mod portal;
pub mod progress;

// Re-export commonly used types
pub use animate::{AnimateOptions, AnimateRepl};
pub use chat::{ChatExit, ChatRepl, ConsoleDialogView};
pub use cli::commands::Cli;
pub use credentials::TerminalKeySelector;
pub use input::{Input, LineReader};
pub use output::console::ConsoleFormatter;
pub use portal::PortalRepl;
pub use progress::reporter::{SimpleProgress, SpinnerProgress};
