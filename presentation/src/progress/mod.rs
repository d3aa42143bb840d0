//! Progress reporting while a video is generated

pub mod reporter;

pub use reporter::{SimpleProgress, SpinnerProgress};
