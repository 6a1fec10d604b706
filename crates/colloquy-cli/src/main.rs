//! colloquy: terminal client for GLM chat completions.
//!
//! Keeps one conversation in memory per run and saves transcripts as
//! JSON files in the configured storage directory.

mod cli;
mod logging;
mod render;
mod repl;

use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use colloquy_ai::{ChatError, Completion, ConversationStore, GlmClient, GlmConfig, Session};
use colloquy_common::{ColloquyError, ConfigError};
use colloquy_config::{ColloquyConfig, API_KEY_ENV};

use crate::cli::Command;

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    let log_control = logging::init(args.log_level);
    tracing::debug!("colloquy v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match colloquy_config::read_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("colloquy: {}", ColloquyError::from(e));
            return ExitCode::FAILURE;
        }
    };
    log_control.apply_config_level(config.logging.level);

    if let Err(e) = check_config(&args.command, &config) {
        eprintln!("colloquy: {e}");
        return ExitCode::FAILURE;
    }

    match run(args.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("colloquy: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Invalid settings are fatal for commands that reach the service. Listing,
/// showing and deleting only touch storage, so they log and carry on.
fn check_config(command: &Command, config: &ColloquyConfig) -> Result<(), ColloquyError> {
    match colloquy_config::validate(config) {
        Ok(()) => Ok(()),
        Err(e) if command.uses_service() => Err(e.into()),
        Err(e) => {
            tracing::warn!("config validation warning: {e}");
            Ok(())
        }
    }
}

async fn run(command: Command, config: &ColloquyConfig) -> Result<(), ColloquyError> {
    match command {
        Command::Chat { resume } => {
            let mut session = open_session(config)?;
            if let Some(id) = resume {
                session.load(&id).map_err(chat_error)?;
                println!("resumed {id} ({} messages)", session.message_count());
            }
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            repl::run(&mut session, stdin, &mut std::io::stdout()).await
        }
        Command::Ask { text, save } => {
            let mut session = open_session(config)?;
            let completion = session.send_user(text).await.map_err(chat_error)?;
            if let Completion::Rejected(rejected) = &completion {
                return Err(ColloquyError::Remote {
                    status: rejected.status,
                    body: rejected.body.to_string(),
                });
            }
            println!("{}", render::completion_text(&completion));
            if save {
                let id = session.save().map_err(chat_error)?;
                println!("saved as {id}");
            }
            Ok(())
        }
        Command::List => {
            let store = open_store(config)?;
            let mut stdout = std::io::stdout().lock();
            for summary in store.list().map_err(chat_error)? {
                writeln!(stdout, "{}", render::summary_line(&summary))?;
            }
            Ok(())
        }
        Command::Show { id } => {
            let store = open_store(config)?;
            let mut stdout = std::io::stdout().lock();
            for message in store.load(&id).map_err(chat_error)? {
                writeln!(stdout, "{}", render::message_block(&message))?;
            }
            Ok(())
        }
        Command::Delete { id } => {
            let store = open_store(config)?;
            if store.delete(&id).map_err(chat_error)? {
                println!("deleted {id}");
                Ok(())
            } else {
                Err(ColloquyError::Chat(format!("conversation not found: {id}")))
            }
        }
    }
}

/// Open the configured storage directory, creating it on first use.
fn open_store(config: &ColloquyConfig) -> Result<ConversationStore, ColloquyError> {
    let dir = config.storage_dir()?;
    std::fs::create_dir_all(&dir)?;
    ConversationStore::open(dir).map_err(chat_error)
}

/// Build a session from config: transport, model, storage, tools, prompt.
fn open_session(config: &ColloquyConfig) -> Result<Session, ColloquyError> {
    if !config.api.has_api_key() {
        return Err(ConfigError::ValidationError(format!(
            "no API key: set {API_KEY_ENV} or [api].api_key"
        ))
        .into());
    }

    let glm = GlmConfig::new(config.api.api_key.clone())
        .with_endpoint(config.api.endpoint.clone())
        .with_connect_timeout(Duration::from_secs(config.api.connect_timeout_secs.into()))
        .with_timeout(Duration::from_secs(config.api.timeout_secs.into()));
    let client = GlmClient::new(glm).map_err(chat_error)?;

    let store = open_store(config)?;
    let mut session = Session::with_client(client, config.api.model.clone(), store.dir())
        .map_err(chat_error)?
        .with_tools(config.load_tools()?);
    if let Some(prompt) = config.system_prompt() {
        session = session.with_system_prompt(prompt);
    }

    tracing::info!(
        model = %session.model(),
        storage = %session.storage_dir().display(),
        tools = session.tools().len(),
        "Session ready"
    );
    Ok(session)
}

fn chat_error(e: ChatError) -> ColloquyError {
    match e {
        ChatError::Io(e) => ColloquyError::Io(e),
        other => ColloquyError::Chat(other.to_string()),
    }
}
