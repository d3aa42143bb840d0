//! REPL (Read-Eval-Print Loop) for the assistant dialog

use crate::chat::command::AssistantCommand;
use crate::chat::view::ConsoleDialogView;
use crate::input::{Input, LineReader};
use crate::output::ConsoleFormatter;
use belajar_application::{
    AiGateway, AssistantDialog, ConversationLogger, DialogError, ImageLoader, MediaKind,
    MediaStore, SendOutcome,
};
use belajar_domain::{ImageDataUri, TutorContext};
use colored::Colorize;
use std::io;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};

/// How the user left the assistant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatExit {
    /// `/tutup` or Ctrl-D: back to the portal screen
    Closed,
    /// `/home`: back to the level picker
    Home,
    /// Leave the program
    Quit,
}

/// Interactive assistant REPL
pub struct ChatRepl {
    dialog: AssistantDialog,
    view: Arc<ConsoleDialogView>,
    images: Arc<dyn ImageLoader>,
    store: Arc<dyn MediaStore>,
}

impl ChatRepl {
    pub fn new(
        gateway: Arc<dyn AiGateway>,
        images: Arc<dyn ImageLoader>,
        store: Arc<dyn MediaStore>,
    ) -> Self {
        let view = Arc::new(ConsoleDialogView::stdout());
        Self {
            dialog: AssistantDialog::new(gateway).with_observer(view.clone()),
            view,
            images,
            store,
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.dialog = self.dialog.with_conversation_logger(logger);
        self
    }

    /// Open the dialog for `context` and run until the user leaves.
    ///
    /// The dialog is always closed on return, so the next call starts fresh.
    pub async fn run(&self, reader: &mut LineReader, context: TutorContext) -> io::Result<ChatExit> {
        println!(
            "{}",
            ConsoleFormatter::assistant_banner(context.subject.map(|s| s.name))
        );
        if let Err(e) = self.dialog.open(context).await {
            eprintln!("{} {}", "Fadel tidak dapat dihubungi:".red(), e);
            return Ok(ChatExit::Closed);
        }

        let exit = self.repl_loop(reader).await;
        self.dialog.close();
        exit
    }

    async fn repl_loop(&self, reader: &mut LineReader) -> io::Result<ChatExit> {
        loop {
            let label = if self.dialog.staged_preview().is_some() {
                "tanya [foto]"
            } else {
                "tanya"
            };
            let line = match reader.read(label)? {
                Input::Line(line) => line,
                Input::Interrupted => {
                    println!("^C");
                    continue;
                }
                Input::Eof => return Ok(ChatExit::Closed),
            };

            match AssistantCommand::parse(&line) {
                AssistantCommand::Close => return Ok(ChatExit::Closed),
                AssistantCommand::Home => return Ok(ChatExit::Home),
                AssistantCommand::Quit => return Ok(ChatExit::Quit),
                AssistantCommand::Help => Self::print_help(),
                AssistantCommand::AttachUsage => println!("Gunakan: /lampir <file foto>"),
                AssistantCommand::Attach(path) => match self.images.load(&path).await {
                    Ok(file) => {
                        println!(
                            "{} {} ({})",
                            "Foto dilampirkan:".cyan(),
                            file.name,
                            file.mime_type
                        );
                        if let Err(e) = self.dialog.stage_image(file) {
                            eprintln!("{}", e);
                        }
                    }
                    Err(e) => eprintln!("{} {}", "Foto tidak dapat dibaca:".red(), e),
                },
                AssistantCommand::ClearAttachment => {
                    self.dialog.clear_staged_image();
                    println!("Lampiran dihapus.");
                }
                AssistantCommand::Message(text) => {
                    if !self.dialog.can_send(&text) {
                        continue;
                    }
                    self.send(&text).await;
                }
            }
        }
    }

    async fn send(&self, text: &str) {
        let outcome = self.dialog.send(text).await;
        self.view.finish_stream();
        match outcome {
            Ok(SendOutcome::ImageGenerated) => self.save_generated_image().await,
            Ok(outcome) => debug!("Send finished: {:?}", outcome),
            Err(DialogError::EmptyMessage) => {}
            Err(e) => eprintln!("{}", e.to_string().red()),
        }
    }

    /// Write the newest generated image to the media directory.
    async fn save_generated_image(&self) {
        let Some(image) = self
            .dialog
            .messages()
            .into_iter()
            .rev()
            .filter(|m| m.is_assistant())
            .find_map(|m| m.image)
        else {
            return;
        };
        let bytes = match ImageDataUri::from_str(&image).and_then(|uri| uri.decode()) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Generated image could not be decoded: {}", e);
                return;
            }
        };
        match self.store.store(MediaKind::Image, &bytes).await {
            Ok(stored) => println!(
                "  {} {}",
                "Gambar disimpan:".green(),
                stored.path.display()
            ),
            Err(e) => eprintln!("{} {}", "Gambar gagal disimpan:".red(), e),
        }
    }

    /// Ask a single question and print the streamed reply.
    pub async fn ask_once(
        &self,
        context: TutorContext,
        question: &str,
    ) -> Result<SendOutcome, DialogError> {
        self.view.set_muted(true);
        let opened = self.dialog.open(context).await;
        self.view.set_muted(false);
        opened?;

        let outcome = self.dialog.send(question).await;
        self.view.finish_stream();
        if let Ok(SendOutcome::ImageGenerated) = outcome {
            self.save_generated_image().await;
        }
        self.dialog.close();
        outcome
    }

    fn print_help() {
        println!();
        println!("Perintah:");
        println!("  /lampir <file>       - Lampirkan foto untuk pertanyaan berikutnya");
        println!("  /hapus               - Batalkan lampiran");
        println!("  /gambar <deskripsi>  - Minta Fadel membuat gambar");
        println!("  /tutup               - Tutup obrolan");
        println!("  /home                - Tutup dan kembali ke awal");
        println!("  /keluar              - Keluar dari program");
        println!();
    }
}
