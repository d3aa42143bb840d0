//! REPL for the photo animation screen

use crate::animate::command::AnimateCommand;
use crate::input::{Input, LineReader};
use crate::output::ConsoleFormatter;
use crate::progress::{SimpleProgress, SpinnerProgress};
use belajar_application::{
    AnimationFlow, AnimationFlowError, AnimationProgressNotifier, ConversationLogger,
    CredentialHost, ImageLoader, MediaStore, NoConversationLogger, TimingParams, VideoGateway,
};
use belajar_domain::{AnimationScreen, AspectRatio};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Choices made on the command line before the screen opens
#[derive(Debug, Clone, Default)]
pub struct AnimateOptions {
    pub image: Option<PathBuf>,
    pub ratio: Option<AspectRatio>,
}

/// Interactive animation REPL; every run starts a fresh flow
pub struct AnimateRepl<V, M, C, L>
where
    V: VideoGateway + 'static,
    M: MediaStore + 'static,
    C: CredentialHost + 'static,
    L: ImageLoader + 'static,
{
    gateway: Arc<V>,
    store: Arc<M>,
    credentials: Arc<C>,
    images: Arc<L>,
    timing: TimingParams,
    conversation_logger: Arc<dyn ConversationLogger>,
    show_spinner: bool,
}

impl<V, M, C, L> AnimateRepl<V, M, C, L>
where
    V: VideoGateway + 'static,
    M: MediaStore + 'static,
    C: CredentialHost + 'static,
    L: ImageLoader + 'static,
{
    pub fn new(
        gateway: Arc<V>,
        store: Arc<M>,
        credentials: Arc<C>,
        images: Arc<L>,
        timing: TimingParams,
    ) -> Self {
        Self {
            gateway,
            store,
            credentials,
            images,
            timing,
            conversation_logger: Arc::new(NoConversationLogger),
            show_spinner: true,
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Set whether to show the spinner (plain lines otherwise)
    pub fn with_spinner(mut self, show: bool) -> Self {
        self.show_spinner = show;
        self
    }

    pub async fn run(&self, reader: &mut LineReader, options: AnimateOptions) -> io::Result<()> {
        let mut flow = AnimationFlow::new(
            self.gateway.clone(),
            self.store.clone(),
            self.credentials.clone(),
            self.images.clone(),
            self.timing,
        )
        .with_conversation_logger(self.conversation_logger.clone());

        println!();
        println!("{}", "Animasikan Fotomu!".cyan().bold());
        println!("{}", "Ubah foto menjadi video pendek bersama Fadel.".dimmed());
        println!();

        flow.check_credentials().await;
        if let Some(path) = options.image {
            Self::report(flow.choose_image(&path).await);
        }
        if let Some(ratio) = options.ratio {
            Self::report(flow.choose_aspect_ratio(ratio));
        }

        loop {
            print!("{}", ConsoleFormatter::format_animation(flow.state()));
            let line = match reader.read("animasi")? {
                Input::Line(line) => line,
                Input::Interrupted => {
                    println!("^C");
                    continue;
                }
                Input::Eof => return Ok(()),
            };
            if line.is_empty() {
                continue;
            }

            match AnimateCommand::parse(&line) {
                AnimateCommand::Back => return Ok(()),
                AnimateCommand::Help => Self::print_help(),
                AnimateCommand::SelectKey => Self::report(flow.select_key().await),
                AnimateCommand::ChooseImageUsage => println!("Gunakan: pilih <file foto>"),
                AnimateCommand::ChooseImage(path) => Self::report(flow.choose_image(&path).await),
                AnimateCommand::Ratio(ratio) => Self::report(flow.choose_aspect_ratio(ratio)),
                AnimateCommand::Generate => {
                    let progress = self.progress();
                    Self::report(flow.generate(progress.as_ref()).await);
                }
                AnimateCommand::Retry => {
                    if flow.screen() == AnimationScreen::Failed {
                        let progress = self.progress();
                        Self::report(flow.generate(progress.as_ref()).await);
                    } else {
                        println!("Tidak ada yang perlu dicoba lagi.");
                    }
                }
                AnimateCommand::StartOver => {
                    flow.start_over();
                }
                AnimateCommand::Unknown(input) => {
                    println!("Perintah tidak dikenal: {}", input);
                    println!("Ketik `bantuan` untuk daftar perintah");
                }
            }
        }
    }

    fn progress(&self) -> Box<dyn AnimationProgressNotifier> {
        if self.show_spinner {
            Box::new(SpinnerProgress::new())
        } else {
            Box::new(SimpleProgress)
        }
    }

    fn report(result: Result<AnimationScreen, AnimationFlowError>) {
        if let Err(e) = result {
            eprintln!("{}", e.to_string().red());
        }
    }

    fn print_help() {
        println!();
        println!("Perintah:");
        println!("  kunci          - Masukkan kunci API Gemini");
        println!("  pilih <file>   - Pilih foto");
        println!("  16:9 | 9:16    - Pilih rasio video");
        println!("  buat           - Buat video");
        println!("  coba           - Coba lagi setelah gagal");
        println!("  ulang          - Mulai dari awal");
        println!("  kembali        - Kembali ke portal");
        println!();
    }
}
