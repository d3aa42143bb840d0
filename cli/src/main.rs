//! CLI entrypoint for belajar-yuk
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use belajar_application::{ConversationLogger, NoConversationLogger};
use belajar_domain::{NavigationState, TutorContext};
use belajar_infrastructure::{
    ApiKeyStore, ConfigLoader, GeminiGateway, JsonlConversationLogger, LocalImageReader,
    LocalMediaStore,
};
use belajar_presentation::portal::apply_selection;
use belajar_presentation::{
    AnimateOptions, AnimateRepl, ChatRepl, Cli, LineReader, PortalRepl, TerminalKeySelector,
};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Console logging from `-v`, plus a daily log file when a directory is configured.
fn init_logging(verbose: u8, directory: Option<&Path>) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "belajar-yuk.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate()?;

    let _log_guard = init_logging(cli.verbose, config.logging.directory.as_deref());
    info!("Starting belajar-yuk");

    // === Dependency Injection ===
    let keys = ApiKeyStore::new(config.gemini.resolve_api_key());
    if !keys.is_set() {
        warn!("No Gemini API key configured; Fadel will not be able to answer");
    }
    let gateway = Arc::new(GeminiGateway::new(keys.clone(), config.gemini.to_settings()));
    let store = Arc::new(LocalMediaStore::new(config.media.resolve_output_dir()));
    let images = Arc::new(LocalImageReader::new());
    let conversation_logger: Arc<dyn ConversationLogger> = config
        .logging
        .conversation_log
        .as_ref()
        .and_then(|path| JsonlConversationLogger::new(path))
        .map(|logger| Arc::new(logger) as Arc<dyn ConversationLogger>)
        .unwrap_or_else(|| Arc::new(NoConversationLogger));

    let chat = ChatRepl::new(gateway.clone(), images.clone(), store.clone())
        .with_conversation_logger(conversation_logger.clone());

    // One-shot question
    if let Some(question) = &cli.question {
        let mut navigation = NavigationState::new();
        apply_selection(
            &mut navigation,
            cli.level,
            cli.grade,
            cli.subject.as_deref(),
        )?;
        let Some(level) = navigation.level() else {
            bail!("--level is required when asking a question (SD or SMP)");
        };
        let context = TutorContext::new(level, navigation.grade(), navigation.subject());
        chat.ask_once(context, question).await?;
        return Ok(());
    }

    let animate = AnimateRepl::new(
        gateway,
        store,
        Arc::new(TerminalKeySelector::new(keys)),
        images,
        config.timing.to_params(),
    )
    .with_conversation_logger(conversation_logger)
    .with_spinner(!cli.quiet);

    let history_file = config
        .repl
        .history_file
        .as_ref()
        .map(PathBuf::from)
        .or_else(ConfigLoader::default_history_path);

    // Animation screen only
    if cli.animate {
        let mut reader = match &history_file {
            Some(path) => LineReader::with_history(path),
            None => LineReader::ephemeral(),
        };
        let options = AnimateOptions {
            image: cli.image,
            ratio: cli.ratio,
        };
        animate.run(&mut reader, options).await?;
        return Ok(());
    }

    PortalRepl::new(chat, animate)
        .with_history_file(history_file)
        .with_selection(cli.level, cli.grade, cli.subject.as_deref())
        .run()
        .await?;

    Ok(())
}
