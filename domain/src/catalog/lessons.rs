//! Static lesson content

use super::entities::{Grade, GradeKey, Level, Subject};
use super::subjects::ALL_SUBJECTS;
use serde::Serialize;

/// Lesson text for one subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonContent {
    pub title: String,
    pub paragraphs: Vec<String>,
}

/// What the lesson view shows: authored content or the "coming soon" placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonView {
    Content(LessonContent),
    Placeholder {
        title: String,
        intro: String,
        notice_heading: &'static str,
        notice: &'static str,
    },
}

impl LessonView {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, LessonView::Placeholder { .. })
    }
}

fn subject_content(subject_name: &str) -> LessonContent {
    LessonContent {
        title: format!("Selamat Datang di Pelajaran {}!", subject_name),
        paragraphs: vec![
            format!(
                "Materi belajar untuk {} tersedia untukmu 24 jam! Kamu bisa langsung bertanya kepada Fadel untuk memulai.",
                subject_name
            ),
            "Coba tanyakan tentang topik tertentu, minta penjelasan konsep yang sulit, atau bahkan kirim foto PR-mu untuk dibantu! Fadel siap membantumu kapan saja.".to_string(),
        ],
    }
}

/// Whether the catalog carries lessons for a (level, grade) key
fn has_content(level: Level, grade: GradeKey) -> bool {
    matches!(
        (level, grade),
        (Level::Primary, GradeKey::Grade(_)) | (Level::LowerSecondary, GradeKey::Default)
    )
}

/// Look up lesson content; `None` is a valid outcome for unmodeled keys.
pub fn lesson_for(level: Level, grade: GradeKey, subject_id: &str) -> Option<LessonContent> {
    if !has_content(level, grade) {
        return None;
    }
    ALL_SUBJECTS
        .iter()
        .find(|s| s.id == subject_id)
        .map(|s| subject_content(s.name))
}

/// Resolve what the lesson screen renders for a subject.
pub fn lesson_view(level: Level, grade: Option<Grade>, subject: &Subject) -> LessonView {
    match lesson_for(level, GradeKey::from(grade), subject.id) {
        Some(content) => LessonView::Content(content),
        None => LessonView::Placeholder {
            title: format!("Selamat Datang di Pelajaran {}!", subject.name),
            intro: format!(
                "Ini adalah ruang belajarmu untuk mata pelajaran {}. Silakan jelajahi topik-topik yang akan datang. Selamat belajar!",
                subject.name
            ),
            notice_heading: "Segera Hadir!",
            notice: "Konten lengkap untuk pelajaran ini sedang dalam persiapan dan akan segera tersedia. Terima kasih sudah sabar menunggu!",
        },
    }
}

/// Header line above a lesson, e.g. `SD - Kelas 3` or `SMP - SMP`
pub fn lesson_heading(level: Level, grade: Option<Grade>) -> String {
    let grade_text = match (level, grade) {
        (Level::Primary, Some(g)) => g.label(),
        (Level::Primary, None) => "Kelas".to_string(),
        (Level::LowerSecondary, _) => "SMP".to_string(),
    };
    format!("{} - {}", level, grade_text)
}
