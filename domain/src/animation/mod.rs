//! Photo-to-video animation.
//!
//! - [`entities`]: aspect ratio, video request and the animation screen state machine
//! - [`status::StatusRotation`]: rotating progress messages shown while generating

pub mod entities;
pub mod status;
