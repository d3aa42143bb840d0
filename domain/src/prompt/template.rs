//! Prompt templates for the Fadel tutor

use super::context::TutorContext;
use crate::chat::command::IMAGE_COMMAND;

const HOMEWORK_HELP: &str = "Kamu juga bisa membantu mengerjakan tugas dan PR. Jika murid mengirim foto soal, analisis gambarnya dan bantu jelaskan cara menyelesaikannya. Jangan hanya berikan jawaban, tapi bimbing mereka langkah demi langkah.";

const IMAGE_GEN_HINT: &str = "Kamu juga bisa membuat gambar dari teks! Coba ketik `/gambar` diikuti deskripsi, contohnya: `/gambar kucing astronot di bulan`.";

/// Templates for everything the tutor says that does not come from the model
pub struct TutorPromptTemplate;

impl TutorPromptTemplate {
    /// System instruction bound to a new chat session
    pub fn system_instruction(context: &TutorContext) -> String {
        let level = context.level;
        let grade_text = context.grade_text();
        match context.subject {
            Some(subject) => format!(
                "Kamu adalah Fadel, seorang asisten belajar AI yang ramah, sabar, dan ahli dalam mata pelajaran {name} untuk murid {level} {grade_text} di Indonesia, didukung oleh Gemini. Fokuslah untuk menjawab pertanyaan yang berkaitan dengan {name}. Jelaskan konsep yang sulit dengan cara yang mudah dimengerti, berikan contoh, dan bantu murid mengerjakan soal. {HOMEWORK_HELP} Jawab dalam Bahasa Indonesia dengan gaya yang positif dan memotivasi.",
                name = subject.name,
            ),
            None => format!(
                "Kamu adalah Fadel, seorang asisten belajar AI umum yang ramah, sabar, dan cerdas untuk murid {level} {grade_text} di Indonesia, didukung oleh Gemini. Kamu bisa menjawab pertanyaan umum, memberikan motivasi, atau membantu murid memilih pelajaran yang ingin mereka pelajari. {HOMEWORK_HELP} Jawab dalam Bahasa Indonesia dengan gaya yang positif dan memotivasi."
            ),
        }
    }

    /// First assistant message of every dialog opening
    pub fn greeting(context: &TutorContext) -> String {
        match context.subject {
            Some(subject) => format!(
                "Halo! Aku Fadel. Kamu sedang di pelajaran {}. Ada yang ingin kamu tanyakan tentang pelajaran ini? Kamu juga bisa kirim foto PR-mu, lho! {}",
                subject.name, IMAGE_GEN_HINT
            ),
            None => format!(
                "Halo! Aku Fadel, asisten belajarmu. Ada yang bisa kubantu? Kamu bisa bertanya apa saja, minta rekomendasi pelajaran, kirim foto PR-mu, atau membuat gambar! {}",
                IMAGE_GEN_HINT
            ),
        }
    }

    pub fn empty_image_prompt() -> String {
        format!(
            "Tolong berikan deskripsi untuk gambar yang ingin kamu buat setelah perintah {}.",
            IMAGE_COMMAND
        )
    }

    pub fn image_in_progress(prompt: &str) -> String {
        format!("Membuat gambar dengan deskripsi: \"{}\"...", prompt)
    }

    pub fn image_ready() -> &'static str {
        "Ini gambar yang kubuat, berdasarkan deskripsimu."
    }

    pub fn image_failed() -> &'static str {
        "Maaf, aku gagal membuat gambar. Coba lagi dengan deskripsi lain ya."
    }

    pub fn reply_failed() -> &'static str {
        "Maaf, ada sedikit gangguan. Coba lagi ya."
    }
}
