//! Line-oriented interactive chat.

use std::io::Write;

use colloquy_ai::Session;
use colloquy_common::ColloquyError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::render;

const HELP: &str = "\
/save        save the conversation and print its id
/new         start over (keeps the system prompt)
/list        list saved conversations
/load ID     replace the conversation with a saved one
/delete ID   delete a saved conversation
/history     print the current conversation
/quit        leave";

#[derive(Debug, PartialEq, Eq)]
pub enum ReplCommand {
    Send(String),
    Save,
    New,
    List,
    Load(String),
    Delete(String),
    History,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Classify one input line. Anything not starting with `/` is a message.
pub fn parse_line(line: &str) -> ReplCommand {
    let line = line.trim();
    if line.is_empty() {
        return ReplCommand::Empty;
    }
    let Some(rest) = line.strip_prefix('/') else {
        return ReplCommand::Send(line.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match (name, arg) {
        ("save", "") => ReplCommand::Save,
        ("new", "") => ReplCommand::New,
        ("list", "") => ReplCommand::List,
        ("history", "") => ReplCommand::History,
        ("help", "") => ReplCommand::Help,
        ("quit" | "exit", "") => ReplCommand::Quit,
        ("load", id) if !id.is_empty() => ReplCommand::Load(id.to_string()),
        ("delete", id) if !id.is_empty() => ReplCommand::Delete(id.to_string()),
        _ => ReplCommand::Unknown(line.to_string()),
    }
}

/// Read lines from `input` until EOF or `/quit`, writing output to `out`.
///
/// Storage and transport failures are reported and the loop continues.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<(), ColloquyError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        match parse_line(&line) {
            ReplCommand::Empty => {}
            ReplCommand::Quit => break,
            ReplCommand::Help => writeln!(out, "{HELP}")?,
            ReplCommand::Unknown(input) => {
                writeln!(out, "unknown command: {input} (try /help)")?;
            }
            ReplCommand::Send(text) => match session.send_user(text).await {
                Ok(completion) => writeln!(out, "{}", render::completion_text(&completion))?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            ReplCommand::Save => match session.save() {
                Ok(id) => writeln!(out, "saved as {id}")?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            ReplCommand::New => {
                session.reset();
                writeln!(out, "started a new conversation")?;
            }
            ReplCommand::List => match session.list_conversations() {
                Ok(summaries) if summaries.is_empty() => writeln!(out, "no saved conversations")?,
                Ok(summaries) => {
                    for summary in &summaries {
                        writeln!(out, "{}", render::summary_line(summary))?;
                    }
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            ReplCommand::Load(id) => match session.load(&id) {
                Ok(()) => writeln!(out, "loaded {id} ({} messages)", session.message_count())?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            ReplCommand::Delete(id) => match session.delete_conversation(&id) {
                Ok(true) => writeln!(out, "deleted {id}")?,
                Ok(false) => writeln!(out, "no conversation {id}")?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            ReplCommand::History => {
                for message in session.messages() {
                    writeln!(out, "{}", render::message_block(message))?;
                }
            }
        }
    }
    Ok(())
}
