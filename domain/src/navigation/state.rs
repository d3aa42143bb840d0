//! Navigation state and transitions

use super::screen::Screen;
use crate::catalog::entities::{Grade, GradeKey, Level, Subject};
use crate::catalog::subjects::find_subject;
use thiserror::Error;

/// Rejected navigation transitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No education level selected")]
    NoLevel,

    #[error("Level {0} has no grade step")]
    GradeNotApplicable(Level),

    #[error("A grade is already selected")]
    GradeAlreadySelected,

    #[error("Select a grade before choosing a subject")]
    GradeRequired,

    #[error("Unknown subject: {0}")]
    UnknownSubject(String),
}

/// Current portal selection (Entity)
///
/// Owns the level/grade/subject hierarchy and whether the assistant dialog is
/// open. Every transition is a single `&mut self` call, so observers never see
/// a half-applied update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    level: Option<Level>,
    grade: Option<Grade>,
    subject: Option<Subject>,
    assistant_open: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> Option<Level> {
        self.level
    }

    pub fn grade(&self) -> Option<Grade> {
        self.grade
    }

    pub fn subject(&self) -> Option<Subject> {
        self.subject
    }

    pub fn is_assistant_open(&self) -> bool {
        self.assistant_open
    }

    /// Select a level. Always clears grade and subject, even for the same level.
    pub fn select_level(&mut self, level: Level) {
        self.level = Some(level);
        self.grade = None;
        self.subject = None;
    }

    /// Select a grade. Only valid for SD while no grade is set.
    pub fn select_grade(&mut self, grade: Grade) -> Result<(), NavigationError> {
        let level = self.level.ok_or(NavigationError::NoLevel)?;
        if !level.has_grades() {
            return Err(NavigationError::GradeNotApplicable(level));
        }
        if self.grade.is_some() {
            return Err(NavigationError::GradeAlreadySelected);
        }
        self.grade = Some(grade);
        self.subject = None;
        Ok(())
    }

    /// Select a subject by id from the list resolved for the current level/grade.
    pub fn select_subject(&mut self, id: &str) -> Result<Subject, NavigationError> {
        let level = self.level.ok_or(NavigationError::NoLevel)?;
        if level.has_grades() && self.grade.is_none() {
            return Err(NavigationError::GradeRequired);
        }
        let subject = find_subject(level, GradeKey::from(self.grade), id)
            .ok_or_else(|| NavigationError::UnknownSubject(id.to_string()))?;
        self.subject = Some(subject);
        Ok(subject)
    }

    /// Pop one level of the hierarchy. No-op at the root.
    pub fn go_back(&mut self) {
        if self.subject.is_some() {
            self.subject = None;
        } else if self.grade.is_some() {
            self.grade = None;
        } else if self.level.is_some() {
            self.level = None;
        }
    }

    /// Clear the whole selection and close the assistant dialog.
    pub fn reset_home(&mut self) {
        *self = Self::default();
    }

    /// Open the assistant dialog. The dialog is only offered once a level is known.
    pub fn open_assistant(&mut self) -> Result<(), NavigationError> {
        if self.level.is_none() {
            return Err(NavigationError::NoLevel);
        }
        self.assistant_open = true;
        Ok(())
    }

    pub fn close_assistant(&mut self) {
        self.assistant_open = false;
    }

    pub fn screen(&self) -> Screen {
        Screen::resolve(self.level, self.grade, self.subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(n: u8) -> Grade {
        Grade::new(n).unwrap()
    }

    fn at_lesson() -> NavigationState {
        let mut nav = NavigationState::new();
        nav.select_level(Level::Primary);
        nav.select_grade(grade(4)).unwrap();
        nav.select_subject("bahasa-inggris").unwrap();
        nav
    }

    #[test]
    fn test_select_level_clears_grade_and_subject_even_when_same() {
        let mut nav = at_lesson();
        nav.select_level(Level::Primary);
        assert_eq!(nav.level(), Some(Level::Primary));
        assert_eq!(nav.grade(), None);
        assert_eq!(nav.subject(), None);
    }

    #[test]
    fn test_grade_rejected_for_smp() {
        let mut nav = NavigationState::new();
        nav.select_level(Level::LowerSecondary);
        assert_eq!(
            nav.select_grade(grade(1)),
            Err(NavigationError::GradeNotApplicable(Level::LowerSecondary))
        );
    }

    #[test]
    fn test_grade_rejected_when_already_set() {
        let mut nav = NavigationState::new();
        nav.select_level(Level::Primary);
        nav.select_grade(grade(1)).unwrap();
        assert_eq!(
            nav.select_grade(grade(2)),
            Err(NavigationError::GradeAlreadySelected)
        );
        assert_eq!(nav.grade(), Some(grade(1)));
    }

    #[test]
    fn test_subject_requires_resolved_list() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.select_subject("pjok"), Err(NavigationError::NoLevel));
        nav.select_level(Level::Primary);
        assert_eq!(nav.select_subject("pjok"), Err(NavigationError::GradeRequired));
        nav.select_grade(grade(1)).unwrap();
        assert!(matches!(
            nav.select_subject("bahasa-inggris"),
            Err(NavigationError::UnknownSubject(_))
        ));
        assert!(nav.select_subject("pjok").is_ok());
    }

    #[test]
    fn test_go_back_from_subject_keeps_level_and_grade() {
        let mut nav = at_lesson();
        nav.go_back();
        assert_eq!(nav.subject(), None);
        assert_eq!(nav.grade(), Some(grade(4)));
        assert_eq!(nav.level(), Some(Level::Primary));
    }

    #[test]
    fn test_go_back_walks_to_root_then_noop() {
        let mut nav = at_lesson();
        nav.go_back();
        nav.go_back();
        assert_eq!(nav.grade(), None);
        nav.go_back();
        assert_eq!(nav.level(), None);
        nav.go_back();
        assert_eq!(nav, NavigationState::new());
    }

    #[test]
    fn test_reset_home_clears_everything_and_closes_dialog() {
        let mut nav = at_lesson();
        nav.open_assistant().unwrap();
        nav.reset_home();
        assert_eq!(nav.level(), None);
        assert_eq!(nav.grade(), None);
        assert_eq!(nav.subject(), None);
        assert!(!nav.is_assistant_open());
    }

    #[test]
    fn test_assistant_needs_level() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.open_assistant(), Err(NavigationError::NoLevel));
        nav.select_level(Level::LowerSecondary);
        assert!(nav.open_assistant().is_ok());
    }

    #[test]
    fn test_screen_is_always_one_of_four_for_any_sequence() {
        // Walk a fixed pseudo-random sequence of operations
        let mut nav = NavigationState::new();
        let ops = [0u8, 1, 2, 3, 1, 3, 3, 0, 2, 1, 3, 0, 0, 2, 3, 3, 3, 1, 2, 2];
        for (step, op) in ops.iter().enumerate() {
            match op {
                0 => nav.select_level(Level::ALL[step % 2]),
                1 => {
                    let _ = nav.select_grade(grade((step % 6) as u8 + 1));
                }
                2 => {
                    let _ = nav.select_subject("akhlak");
                }
                _ => nav.go_back(),
            }
            let screen = nav.screen();
            assert_eq!(
                screen,
                Screen::resolve(nav.level(), nav.grade(), nav.subject())
            );
            assert!(matches!(
                screen.name(),
                "level_picker" | "grade_picker" | "subject_grid" | "lesson"
            ));
        }
    }
}
