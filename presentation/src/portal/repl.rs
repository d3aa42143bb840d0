//! Portal REPL: level, grade and subject wizard

use crate::animate::{AnimateOptions, AnimateRepl};
use crate::chat::{ChatExit, ChatRepl};
use crate::input::{Input, LineReader};
use crate::output::ConsoleFormatter;
use crate::portal::command::PortalCommand;
use belajar_application::{CredentialHost, ImageLoader, MediaStore, VideoGateway};
use belajar_domain::{Grade, Level, NavigationError, NavigationState, Screen, TutorContext};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// Why a numbered choice could not be applied
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectError {
    #[error("Pilihan {0} tidak ada di daftar")]
    OutOfRange(usize),

    #[error("Tidak ada yang bisa dipilih di halaman ini")]
    NothingToSelect,

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// Apply the n-th (1-based) item of the current screen.
pub fn select_item(navigation: &mut NavigationState, n: usize) -> Result<(), SelectError> {
    let index = n.checked_sub(1).ok_or(SelectError::OutOfRange(n))?;
    match navigation.screen() {
        Screen::LevelPicker => {
            let level = Level::ALL
                .get(index)
                .copied()
                .ok_or(SelectError::OutOfRange(n))?;
            navigation.select_level(level);
        }
        Screen::GradePicker { .. } => {
            let grade = u8::try_from(n)
                .ok()
                .and_then(|n| Grade::new(n).ok())
                .ok_or(SelectError::OutOfRange(n))?;
            navigation.select_grade(grade)?;
        }
        Screen::SubjectGrid { subjects, .. } => {
            let subject = subjects.get(index).ok_or(SelectError::OutOfRange(n))?;
            navigation.select_subject(subject.id)?;
        }
        Screen::Lesson { .. } => return Err(SelectError::NothingToSelect),
    }
    Ok(())
}

/// Interactive portal
pub struct PortalRepl<V, M, C, L>
where
    V: VideoGateway + 'static,
    M: MediaStore + 'static,
    C: CredentialHost + 'static,
    L: ImageLoader + 'static,
{
    navigation: NavigationState,
    chat: ChatRepl,
    animate: AnimateRepl<V, M, C, L>,
    history_file: Option<PathBuf>,
}

impl<V, M, C, L> PortalRepl<V, M, C, L>
where
    V: VideoGateway + 'static,
    M: MediaStore + 'static,
    C: CredentialHost + 'static,
    L: ImageLoader + 'static,
{
    pub fn new(chat: ChatRepl, animate: AnimateRepl<V, M, C, L>) -> Self {
        Self {
            navigation: NavigationState::new(),
            chat,
            animate,
            history_file: None,
        }
    }

    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Start from a level/grade chosen on the command line.
    ///
    /// Invalid combinations are reported and leave the remaining steps to the
    /// wizard.
    pub fn with_selection(
        mut self,
        level: Option<Level>,
        grade: Option<u8>,
        subject: Option<&str>,
    ) -> Self {
        if let Err(e) = apply_selection(&mut self.navigation, level, grade, subject) {
            eprintln!("{}", e.to_string().yellow());
        }
        self
    }

    /// Run the portal until the user quits
    pub async fn run(&mut self) -> io::Result<()> {
        let mut reader = match &self.history_file {
            Some(path) => LineReader::with_history(path),
            None => LineReader::ephemeral(),
        };

        loop {
            let screen = self.navigation.screen();
            println!();
            print!("{}", ConsoleFormatter::format_screen(&screen));
            print!("{}", ConsoleFormatter::portal_hints(&screen));

            let line = match reader.read(screen_prompt(&screen))? {
                Input::Line(line) => line,
                Input::Interrupted => {
                    println!("^C");
                    continue;
                }
                Input::Eof => break,
            };
            if line.is_empty() {
                continue;
            }

            match PortalCommand::parse(&line) {
                PortalCommand::Select(n) => {
                    if let Err(e) = select_item(&mut self.navigation, n) {
                        println!("{}", e.to_string().yellow());
                    }
                }
                PortalCommand::Back => self.navigation.go_back(),
                PortalCommand::Home => self.navigation.reset_home(),
                PortalCommand::Ask => {
                    if self.open_assistant(&mut reader).await? {
                        break;
                    }
                }
                PortalCommand::Animate => {
                    self.animate
                        .run(&mut reader, AnimateOptions::default())
                        .await?;
                }
                PortalCommand::Help => print!("{}", ConsoleFormatter::portal_hints(&screen)),
                PortalCommand::Quit => break,
                PortalCommand::Unknown(input) => {
                    println!("Perintah tidak dikenal: {}", input);
                }
            }
        }

        println!("Sampai jumpa!");
        Ok(())
    }

    /// Returns true when the user asked to quit from inside the dialog.
    async fn open_assistant(&mut self, reader: &mut LineReader) -> io::Result<bool> {
        if let Err(e) = self.navigation.open_assistant() {
            println!("{}", e.to_string().yellow());
            return Ok(false);
        }
        let Some(level) = self.navigation.level() else {
            return Ok(false);
        };
        let context = TutorContext::new(
            level,
            self.navigation.grade(),
            self.navigation.subject(),
        );
        info!("Opening assistant for {}", screen_prompt(&self.navigation.screen()));

        match self.chat.run(reader, context).await? {
            ChatExit::Closed => {
                self.navigation.close_assistant();
                Ok(false)
            }
            ChatExit::Home => {
                self.navigation.reset_home();
                Ok(false)
            }
            ChatExit::Quit => Ok(true),
        }
    }
}

/// Apply command-line preselection in wizard order.
pub fn apply_selection(
    navigation: &mut NavigationState,
    level: Option<Level>,
    grade: Option<u8>,
    subject: Option<&str>,
) -> Result<(), SelectError> {
    let Some(level) = level else {
        return Ok(());
    };
    navigation.select_level(level);
    if let Some(grade) = grade {
        let grade = Grade::new(grade).map_err(|_| SelectError::OutOfRange(grade as usize))?;
        navigation.select_grade(grade)?;
    }
    if let Some(subject) = subject {
        navigation.select_subject(subject)?;
    }
    Ok(())
}

fn screen_prompt(screen: &Screen) -> &'static str {
    match screen {
        Screen::LevelPicker => "jenjang",
        Screen::GradePicker { .. } => "kelas",
        Screen::SubjectGrid { .. } => "pelajaran",
        Screen::Lesson { .. } => "materi",
    }
}
