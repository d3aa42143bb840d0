//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod animate_image;
pub mod assistant_dialog;
pub mod generate_video;
