//! Tutor context value object

use crate::catalog::entities::{Grade, Level, Subject};

/// Where the learner is when they open the assistant (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorContext {
    pub level: Level,
    pub grade: Option<Grade>,
    pub subject: Option<Subject>,
}

impl TutorContext {
    pub fn new(level: Level, grade: Option<Grade>, subject: Option<Subject>) -> Self {
        Self {
            level,
            grade,
            subject,
        }
    }

    /// Grade phrase used inside the system instruction.
    ///
    /// `kelas N` for SD with a grade, `SMP` for SMP, empty otherwise.
    pub fn grade_text(&self) -> String {
        match (self.level, self.grade) {
            (Level::Primary, Some(grade)) => format!("kelas {}", grade),
            (Level::LowerSecondary, _) => "SMP".to_string(),
            (Level::Primary, None) => String::new(),
        }
    }
}
