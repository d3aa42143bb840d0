//! Tutor persona text.
//!
//! - [`context::TutorContext`]: the level/grade/subject a session is bound to
//! - [`template::TutorPromptTemplate`]: system instruction, greeting and
//!   the fixed replies the dialog shows

pub mod context;
pub mod template;

pub use context::TutorContext;
pub use template::TutorPromptTemplate;
