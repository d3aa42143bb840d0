//! Subject lists per (level, grade)

use super::entities::{GradeKey, Level, Subject, SubjectIcon};

pub const SKI: Subject = Subject {
    id: "ski",
    name: "SKI",
    icon: SubjectIcon::History,
};
pub const AKHLAK: Subject = Subject {
    id: "akhlak",
    name: "Akhlak",
    icon: SubjectIcon::Religion,
};
pub const FIKIH: Subject = Subject {
    id: "fikih",
    name: "Fikih",
    icon: SubjectIcon::Religion,
};
pub const QURAN_HADIST: Subject = Subject {
    id: "al-quran-hadist",
    name: "Al-Qur'an Hadist",
    icon: SubjectIcon::Book,
};
pub const BAHASA_INDONESIA: Subject = Subject {
    id: "bahasa-indonesia",
    name: "Bahasa Indonesia",
    icon: SubjectIcon::Language,
};
pub const BAHASA_INGGRIS: Subject = Subject {
    id: "bahasa-inggris",
    name: "Bahasa Inggris",
    icon: SubjectIcon::English,
};
pub const PJOK: Subject = Subject {
    id: "pjok",
    name: "PJOK",
    icon: SubjectIcon::PhysicalEducation,
};

/// Lower primary grades (1-3)
const BASE_SUBJECTS: &[Subject] = &[SKI, AKHLAK, FIKIH, QURAN_HADIST, BAHASA_INDONESIA, PJOK];

/// Upper primary grades (4-6) and SMP
const SUBJECTS_WITH_ENGLISH: &[Subject] = &[
    SKI,
    AKHLAK,
    FIKIH,
    QURAN_HADIST,
    BAHASA_INDONESIA,
    BAHASA_INGGRIS,
    PJOK,
];

/// Every subject known to the catalog
pub const ALL_SUBJECTS: &[Subject] = SUBJECTS_WITH_ENGLISH;

/// Subjects offered for a (level, grade) key.
///
/// Combinations the catalog does not model (SD without a grade, SMP with a
/// grade) resolve to an empty list.
pub fn subjects_for(level: Level, grade: GradeKey) -> &'static [Subject] {
    match (level, grade) {
        (Level::Primary, GradeKey::Grade(g)) if g.number() <= 3 => BASE_SUBJECTS,
        (Level::Primary, GradeKey::Grade(_)) => SUBJECTS_WITH_ENGLISH,
        (Level::Primary, GradeKey::Default) => &[],
        (Level::LowerSecondary, GradeKey::Default) => SUBJECTS_WITH_ENGLISH,
        (Level::LowerSecondary, GradeKey::Grade(_)) => &[],
    }
}

/// Find a subject by id within the list for a (level, grade) key.
pub fn find_subject(level: Level, grade: GradeKey, id: &str) -> Option<Subject> {
    subjects_for(level, grade)
        .iter()
        .find(|s| s.id == id)
        .copied()
}
