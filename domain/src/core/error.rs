//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid education level: {0} (expected SD or SMP)")]
    InvalidLevel(String),

    #[error("Invalid grade: {0} (expected 1-6)")]
    InvalidGrade(String),

    #[error("Invalid aspect ratio: {0} (expected 16:9 or 9:16)")]
    InvalidAspectRatio(String),

    #[error("Malformed data URI")]
    MalformedDataUri,
}
