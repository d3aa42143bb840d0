//! Screen resolution

use crate::catalog::entities::{Grade, GradeKey, Level, Subject};
use crate::catalog::subjects::subjects_for;

/// One of the four portal screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    LevelPicker,
    GradePicker {
        level: Level,
    },
    SubjectGrid {
        level: Level,
        grade: Option<Grade>,
        subjects: &'static [Subject],
    },
    Lesson {
        level: Level,
        grade: Option<Grade>,
        subject: Subject,
    },
}

impl Screen {
    /// Derive the screen from the current selection.
    ///
    /// Pure: the same (level, grade, subject) always yields the same screen.
    pub fn resolve(level: Option<Level>, grade: Option<Grade>, subject: Option<Subject>) -> Self {
        let Some(level) = level else {
            return Screen::LevelPicker;
        };
        if level.has_grades() && grade.is_none() {
            return Screen::GradePicker { level };
        }
        match subject {
            None => Screen::SubjectGrid {
                level,
                grade,
                subjects: subjects_for(level, GradeKey::from(grade)),
            },
            Some(subject) => Screen::Lesson {
                level,
                grade,
                subject,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Screen::LevelPicker => "level_picker",
            Screen::GradePicker { .. } => "grade_picker",
            Screen::SubjectGrid { .. } => "subject_grid",
            Screen::Lesson { .. } => "lesson",
        }
    }
}
