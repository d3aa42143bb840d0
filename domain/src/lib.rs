//! Domain layer for belajar-yuk
//!
//! This crate contains the catalog, the state machines and the value objects
//! of the learning portal. It performs no I/O.
//!
//! # Core Concepts
//!
//! ## Portal navigation
//!
//! A learner picks a level (SD or SMP), a grade (SD only) and a subject.
//! [`NavigationState`] holds that selection and [`Screen`] is derived from it.
//!
//! ## Fadel
//!
//! Fadel is the tutor persona. A [`TutorContext`] binds a chat session to the
//! learner's level, grade and subject; [`ChatCommand`] separates `/gambar`
//! image requests from ordinary questions.
//!
//! ## Animation
//!
//! [`AnimationState`] drives the photo-to-video screen, from key selection to
//! a playable result.

pub mod animation;
pub mod catalog;
pub mod chat;
pub mod core;
pub mod navigation;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use animation::{
    entities::{
        AnimationError, AnimationPhase, AnimationScreen, AnimationState, AspectRatio,
        GENERIC_FAILURE_MESSAGE, INVALID_KEY_MESSAGE, PlayableVideo, VideoRequest,
    },
    status::{STATUS_MESSAGES, StatusRotation},
};
pub use catalog::{
    entities::{Grade, GradeKey, Level, Subject, SubjectIcon, slugify},
    lessons::{LessonContent, LessonView, lesson_for, lesson_heading, lesson_view},
    subjects::{ALL_SUBJECTS, find_subject, subjects_for},
};
pub use chat::{
    command::{ChatCommand, IMAGE_COMMAND},
    entities::{ChatMessage, MessageId, Role},
    log::MessageLog,
    media::{ImageDataUri, ImageFile, InlineImage, StagedImage, mime_type_for_extension},
};
pub use core::{error::DomainError, string::truncate};
pub use navigation::{
    screen::Screen,
    state::{NavigationError, NavigationState},
};
pub use prompt::{TutorContext, TutorPromptTemplate};
pub use session::stream::StreamEvent;
