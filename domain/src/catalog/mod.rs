//! Static content catalog.
//!
//! - [`entities`]: education levels, grades, subjects and their icons
//! - [`subjects`]: the subject list offered for each (level, grade) pair
//! - [`lessons`]: static lesson text keyed by (level, grade, subject id)

pub mod entities;
pub mod lessons;
pub mod subjects;
