//! Catalog value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Coarse education tier (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    /// Sekolah Dasar, grades 1 to 6
    #[serde(rename = "SD")]
    Primary,
    /// Sekolah Menengah Pertama, no grade step
    #[serde(rename = "SMP")]
    LowerSecondary,
}

impl Level {
    pub const ALL: [Level; 2] = [Level::Primary, Level::LowerSecondary];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Primary => "SD",
            Level::LowerSecondary => "SMP",
        }
    }

    /// Long form shown on the level picker
    pub fn description(&self) -> &'static str {
        match self {
            Level::Primary => "Sekolah Dasar (Kelas 1-6)",
            Level::LowerSecondary => "Sekolah Menengah Pertama",
        }
    }

    /// Whether a grade must be picked before subjects are shown
    pub fn has_grades(&self) -> bool {
        matches!(self, Level::Primary)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Level {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sd" | "primary" => Ok(Level::Primary),
            "smp" | "lower-secondary" | "lowersecondary" => Ok(Level::LowerSecondary),
            other => Err(DomainError::InvalidLevel(other.to_string())),
        }
    }
}

/// Primary-tier school year (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Grade(u8);

impl Grade {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(number: u8) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&number) {
            Ok(Self(number))
        } else {
            Err(DomainError::InvalidGrade(number.to_string()))
        }
    }

    /// All six primary grades in ascending order
    pub fn all() -> impl Iterator<Item = Grade> {
        (Self::MIN..=Self::MAX).map(Grade)
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// Display label, e.g. `Kelas 3`
    pub fn label(&self) -> String {
        format!("Kelas {}", self.0)
    }
}

impl TryFrom<u8> for Grade {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Grade::new(value)
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Grade {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u8 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidGrade(s.to_string()))?;
        Grade::new(number)
    }
}

/// Grade part of a catalog key: a concrete grade or the level-wide default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeKey {
    Grade(Grade),
    Default,
}

impl From<Option<Grade>> for GradeKey {
    fn from(grade: Option<Grade>) -> Self {
        grade.map_or(GradeKey::Default, GradeKey::Grade)
    }
}

/// Icon shown next to a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectIcon {
    Book,
    Language,
    PhysicalEducation,
    History,
    Religion,
    English,
}

impl SubjectIcon {
    /// Terminal glyph for the icon
    pub fn glyph(&self) -> &'static str {
        match self {
            SubjectIcon::Book => "📖",
            SubjectIcon::Language => "🗣",
            SubjectIcon::PhysicalEducation => "⚽",
            SubjectIcon::History => "🏛",
            SubjectIcon::Religion => "🕌",
            SubjectIcon::English => "🔤",
        }
    }
}

/// A school subject (Value Object)
///
/// Subjects are defined statically; `id` is the slug of `name` and is unique
/// within a subject list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Subject {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: SubjectIcon,
}

/// Derive a stable subject id from its display name.
///
/// Lowercases, turns each whitespace character into `-` and drops apostrophes.
pub fn slugify(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '\'')
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .flat_map(char::to_lowercase)
        .collect()
}
