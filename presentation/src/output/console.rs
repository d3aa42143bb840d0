//! Console output formatter for portal screens, chat messages and the
//! animation screen

use belajar_domain::{
    AnimationPhase, AnimationScreen, AnimationState, AspectRatio, ChatMessage, Grade, Level,
    LessonView, Role, Screen, lesson_heading, lesson_view,
};
use colored::Colorize;

/// Renders domain state as terminal text
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one portal screen with its numbered choices
    pub fn format_screen(screen: &Screen) -> String {
        let mut output = String::new();
        match screen {
            Screen::LevelPicker => {
                output.push_str(&Self::header("Belajar Yuk!"));
                output.push_str(&Self::section_header("Pilih Jenjang Pendidikan"));
                for (i, level) in Level::ALL.iter().enumerate() {
                    output.push_str(&format!(
                        "  {}. {}  {}\n",
                        i + 1,
                        level.as_str().bold(),
                        level.description().dimmed()
                    ));
                }
            }
            Screen::GradePicker { level } => {
                output.push_str(&Self::header(&format!("{} - Pilih Kelas", level)));
                output.push('\n');
                for (i, grade) in Grade::all().enumerate() {
                    output.push_str(&format!("  {}. {}\n", i + 1, grade.label()));
                }
            }
            Screen::SubjectGrid {
                level,
                grade,
                subjects,
            } => {
                output.push_str(&Self::header(&lesson_heading(*level, *grade)));
                output.push_str(&Self::section_header("Pilih Mata Pelajaran"));
                if subjects.is_empty() {
                    output.push_str(&format!(
                        "  {}\n",
                        "Belum ada mata pelajaran untuk pilihan ini.".yellow()
                    ));
                }
                for (i, subject) in subjects.iter().enumerate() {
                    output.push_str(&format!(
                        "  {}. {} {}\n",
                        i + 1,
                        subject.icon.glyph(),
                        subject.name
                    ));
                }
            }
            Screen::Lesson {
                level,
                grade,
                subject,
            } => {
                output.push_str(&Self::header(&lesson_heading(*level, *grade)));
                output.push('\n');
                output.push_str(&Self::format_lesson(&lesson_view(*level, *grade, subject)));
            }
        }
        output
    }

    fn format_lesson(view: &LessonView) -> String {
        let mut output = String::new();
        match view {
            LessonView::Content(content) => {
                output.push_str(&format!("{}\n", content.title.cyan().bold()));
                for paragraph in &content.paragraphs {
                    output.push_str(&format!("\n{}\n", paragraph));
                }
            }
            LessonView::Placeholder {
                title,
                intro,
                notice_heading,
                notice,
            } => {
                output.push_str(&format!("{}\n\n{}\n", title.cyan().bold(), intro));
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    notice_heading.yellow().bold(),
                    Self::indent(notice, "  ")
                ));
            }
        }
        output
    }

    /// Commands available on a portal screen
    pub fn portal_hints(screen: &Screen) -> String {
        let hint = match screen {
            Screen::LevelPicker => "nomor = pilih, a = animasi foto, q = keluar",
            Screen::GradePicker { .. } | Screen::SubjectGrid { .. } => {
                "nomor = pilih, k = kembali, h = home, t = tanya Fadel, a = animasi foto, q = keluar"
            }
            Screen::Lesson { .. } => {
                "t = tanya Fadel, k = kembali, h = home, a = animasi foto, q = keluar"
            }
        };
        format!("\n{}\n", hint.dimmed())
    }

    /// Format a finished chat message
    pub fn format_message(message: &ChatMessage) -> String {
        let mut output = format!("{}{}", Self::speaker(message.role), message.text);
        if let Some(image) = &message.image {
            output.push_str(&format!("\n  {} {}", "[gambar]".magenta(), Self::image_label(image)));
        }
        output
    }

    /// Speaker prefix printed before a message or a stream of deltas
    pub fn speaker(role: Role) -> String {
        match role {
            Role::Assistant => format!("{} ", "Fadel:".green().bold()),
            Role::User => format!("{} ", "Kamu:".blue().bold()),
            Role::System => format!("{} ", "*".dimmed()),
        }
    }

    fn image_label(image: &str) -> String {
        if image.starts_with("data:") {
            let mime = image
                .strip_prefix("data:")
                .and_then(|rest| rest.split(';').next())
                .unwrap_or("image");
            format!("({})", mime)
        } else {
            image.to_string()
        }
    }

    pub fn assistant_banner(subject: Option<&str>) -> String {
        let title = match subject {
            Some(name) => format!("Tanya Fadel - {}", name),
            None => "Tanya Fadel".to_string(),
        };
        format!(
            "\n{}\n{}\n",
            Self::header(&title),
            "/lampir <file> = lampirkan foto, /hapus = batal lampiran, /gambar <deskripsi> = buat gambar, /tutup = tutup, /home = ke awal"
                .dimmed()
        )
    }

    /// Describe the animation screen and what can be done next
    pub fn format_animation(state: &AnimationState) -> String {
        let mut output = String::new();
        match state.screen() {
            AnimationScreen::NeedsApiKey => {
                if let AnimationPhase::Failed(message) = state.phase() {
                    output.push_str(&format!("{}\n", message.red()));
                }
                output.push_str(&format!(
                    "{}\n{}\n",
                    "Kunci API diperlukan untuk membuat video.".yellow(),
                    "Ketik `kunci` untuk memasukkan kunci API Gemini.".dimmed()
                ));
            }
            AnimationScreen::Upload => {
                output.push_str(&format!(
                    "{}\n",
                    "Ketik `pilih <file>` untuk memilih foto.".dimmed()
                ));
            }
            AnimationScreen::ChooseRatio => {
                output.push_str(&Self::staged_photo(state));
                output.push_str(&format!("{}\n", Self::ratio_hint().dimmed()));
            }
            AnimationScreen::ReadyToGenerate => {
                output.push_str(&Self::staged_photo(state));
                if let Some(ratio) = state.aspect_ratio() {
                    output.push_str(&format!("Rasio: {}\n", ratio.label()));
                }
                output.push_str(&format!(
                    "{}\n",
                    "Ketik `buat` untuk membuat video.".dimmed()
                ));
            }
            AnimationScreen::Generating => {
                output.push_str("Video sedang dibuat...\n");
            }
            AnimationScreen::Succeeded => {
                if let AnimationPhase::Succeeded(video) = state.phase() {
                    output.push_str(&format!(
                        "{} {}\n",
                        "Video siap:".green().bold(),
                        video.url
                    ));
                }
                output.push_str(&format!(
                    "{}\n",
                    "Ketik `ulang` untuk membuat video lain.".dimmed()
                ));
            }
            AnimationScreen::Failed => {
                if let AnimationPhase::Failed(message) = state.phase() {
                    output.push_str(&format!("{}\n", message.red()));
                }
                output.push_str(&format!(
                    "{}\n",
                    "Ketik `coba` untuk mencoba lagi atau `ulang` untuk mulai dari awal.".dimmed()
                ));
            }
        }
        output
    }

    fn staged_photo(state: &AnimationState) -> String {
        match state.image() {
            Some(staged) => format!(
                "Foto: {} ({}, {} byte)\n",
                staged.file.name,
                staged.file.mime_type,
                staged.file.bytes.len()
            ),
            None => String::new(),
        }
    }

    fn ratio_hint() -> String {
        let ratios = AspectRatio::ALL
            .iter()
            .map(|r| format!("`{}` ({})", r.as_str(), r.label()))
            .collect::<Vec<_>>()
            .join(" atau ");
        format!("Pilih rasio video: {}", ratios)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use belajar_domain::{
        ImageFile, MessageId, NavigationState, PlayableVideo, STATUS_MESSAGES,
    };

    #[test]
    fn test_level_picker_lists_levels() {
        let output = ConsoleFormatter::format_screen(&Screen::LevelPicker);
        assert!(output.contains("Sekolah Dasar (Kelas 1-6)"));
        assert!(output.contains("Sekolah Menengah Pertama"));
    }

    #[test]
    fn test_grade_picker_lists_six_grades() {
        let output = ConsoleFormatter::format_screen(&Screen::GradePicker {
            level: Level::Primary,
        });
        assert!(output.contains("6. Kelas 6"));
        assert!(!output.contains("7."));
    }

    #[test]
    fn test_subject_grid_numbers_subjects() {
        let mut nav = NavigationState::new();
        nav.select_level(Level::LowerSecondary);
        let output = ConsoleFormatter::format_screen(&nav.screen());
        assert!(output.contains("SMP - SMP"));
        assert!(output.contains("6. 🔤 Bahasa Inggris"));
        assert!(output.contains("7. ⚽ PJOK"));
    }

    #[test]
    fn test_lesson_renders_content() {
        let mut nav = NavigationState::new();
        nav.select_level(Level::Primary);
        nav.select_grade(Grade::new(2).unwrap()).unwrap();
        nav.select_subject("pjok").unwrap();
        let output = ConsoleFormatter::format_screen(&nav.screen());
        assert!(output.contains("SD - Kelas 2"));
        assert!(output.contains("Selamat Datang di Pelajaran PJOK!"));
    }

    #[test]
    fn test_generated_image_label() {
        let message = ChatMessage::assistant(MessageId(3), "Ini dia gambarnya!")
            .with_image(Some("data:image/png;base64,AAAA".to_string()));
        let output = ConsoleFormatter::format_message(&message);
        assert!(output.contains("Ini dia gambarnya!"));
        assert!(output.contains("(image/png)"));
        assert!(!output.contains("AAAA"));
    }

    #[test]
    fn test_animation_screens() {
        let mut state = AnimationState::new();
        assert!(ConsoleFormatter::format_animation(&state).contains("kunci"));

        state.mark_key_selected();
        state
            .choose_image(ImageFile::new("kucing.jpg", "image/jpeg", vec![1, 2, 3]))
            .unwrap();
        let output = ConsoleFormatter::format_animation(&state);
        assert!(output.contains("kucing.jpg"));
        assert!(output.contains("16:9"));

        state.choose_aspect_ratio(AspectRatio::Portrait).unwrap();
        state.begin_generation().unwrap();
        state.complete(PlayableVideo {
            url: "file:///tmp/animasi.mp4".to_string(),
        });
        let output = ConsoleFormatter::format_animation(&state);
        assert!(output.contains("file:///tmp/animasi.mp4"));
        assert!(!output.contains(STATUS_MESSAGES[0]));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}
