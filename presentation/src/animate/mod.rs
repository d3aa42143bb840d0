//! Photo animation screen

pub mod command;
mod repl;

pub use command::AnimateCommand;
pub use repl::{AnimateOptions, AnimateRepl};
