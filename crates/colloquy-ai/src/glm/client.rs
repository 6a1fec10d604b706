//! GLM client struct, request building, and response interpretation.

use crate::{ChatError, Completion, Message, RemoteError, ToolDefinition};

use super::config::GlmConfig;

/// GLM API client.
pub struct GlmClient {
    pub(crate) config: GlmConfig,
    pub(crate) http: reqwest::Client,
}

impl GlmClient {
    pub fn new(config: GlmConfig) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ChatError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GlmConfig {
        &self.config
    }
}

/// Build the JSON request body. `tools` is omitted when empty.
pub(crate) fn build_request_body(
    model: &str,
    messages: &[Message],
    tools: &[ToolDefinition],
) -> serde_json::Value {
    let mut body = serde_json::json!({
        "model": model,
        "messages": messages,
    });

    if !tools.is_empty() {
        body["tools"] = serde_json::json!(tools);
    }

    body
}

/// Turn a status code and raw body into a completion outcome.
///
/// Only 200 counts as success. Every other status is handed back to the
/// caller with its body, parsed as JSON when possible.
pub(crate) fn interpret_response(status: u16, text: &str) -> Result<Completion, ChatError> {
    if status != 200 {
        let body = serde_json::from_str(text)
            .unwrap_or_else(|_| serde_json::Value::String(text.to_string()));
        return Ok(Completion::Rejected(RemoteError { status, body }));
    }

    let json: serde_json::Value =
        serde_json::from_str(text).map_err(|e| ChatError::Parse(e.to_string()))?;
    parse_response(json).map(Completion::Reply)
}

/// Extract `choices[0].message` from a successful response.
pub(crate) fn parse_response(mut json: serde_json::Value) -> Result<Message, ChatError> {
    let message = json
        .get_mut("choices")
        .and_then(|choices| choices.get_mut(0))
        .and_then(|choice| choice.get_mut("message"))
        .map(serde_json::Value::take)
        .ok_or_else(|| ChatError::Parse("no choices[0].message in response".to_string()))?;

    serde_json::from_value(message).map_err(|e| ChatError::Parse(e.to_string()))
}
