//! Navigation state machine.
//!
//! - [`state::NavigationState`]: selected level, grade, subject and the
//!   assistant dialog flag, with the transitions between them
//! - [`screen::Screen`]: the screen derived from the current selection

pub mod screen;
pub mod state;
