use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colloquy_config::LogLevel;

/// Colloquy: chat with a GLM model and keep conversations on disk.
#[derive(Parser, Debug)]
#[command(name = "colloquy", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Interactive chat. Lines starting with `/` are commands (`/help`).
    Chat {
        /// Continue a saved conversation.
        #[arg(long)]
        resume: Option<String>,
    },
    /// Send one message and print the reply.
    Ask {
        /// Message text.
        text: String,
        /// Save the exchange and print its id.
        #[arg(long)]
        save: bool,
    },
    /// List saved conversations, newest first.
    List,
    /// Print a saved conversation.
    Show { id: String },
    /// Delete a saved conversation.
    Delete { id: String },
}

impl Command {
    /// Whether the command talks to the completion service.
    pub fn uses_service(&self) -> bool {
        matches!(self, Command::Chat { .. } | Command::Ask { .. })
    }
}

pub fn parse() -> Args {
    Args::parse()
}
