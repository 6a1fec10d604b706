//! Zhipu GLM chat-completion client.
//!
//! Implements the `CompletionClient` trait against the OpenAI-style
//! `chat/completions` endpoint at https://open.bigmodel.cn. The request
//! carries the model, the full transcript, and any tool definitions; the
//! credential travels as a bearer token.

mod api;
mod client;
mod config;


pub use client::GlmClient;
pub use config::GlmConfig;
