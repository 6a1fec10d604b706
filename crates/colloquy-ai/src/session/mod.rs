//! Conversation session management.
//!
//! A `Session` owns one transcript, sends it to a completion client, and
//! saves or restores it through a `ConversationStore`.

mod chat;
mod manager;
mod persist;

#[cfg(test)]
mod tests;

pub use manager::Session;
