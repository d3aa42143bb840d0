//! Assistant chat module
//!
//! Line-based front-end for the assistant dialog: attachments, `/gambar`
//! image requests and streamed replies.

pub mod command;
mod repl;
pub mod view;

pub use command::AssistantCommand;
pub use repl::{ChatExit, ChatRepl};
pub use view::ConsoleDialogView;
