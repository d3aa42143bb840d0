//! Tutor session domain.
//!
//! - [`stream::StreamEvent`]: incremental reply events from a chat session

pub mod stream;
