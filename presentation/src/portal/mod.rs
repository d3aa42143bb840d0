//! Learning portal screens

pub mod command;
mod repl;

pub use command::PortalCommand;
pub use repl::{PortalRepl, SelectError, apply_selection, select_item};
