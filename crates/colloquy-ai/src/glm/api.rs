//! CompletionClient trait implementation for GlmClient.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{ChatError, Completion, CompletionClient, Message, ToolDefinition};

use super::client::{build_request_body, interpret_response, GlmClient};

#[async_trait]
impl CompletionClient for GlmClient {
    async fn complete(
        &self,
        model: &str,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<Completion, ChatError> {
        let body = build_request_body(model, messages, tools);

        debug!(
            model,
            messages = messages.len(),
            tools = tools.len(),
            "GLM API request"
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let completion = interpret_response(status, &text)?;
        match &completion {
            Completion::Reply(message) => {
                debug!(has_content = message.has_content(), "GLM API reply");
            }
            Completion::Rejected(err) => {
                warn!(status = err.status, "GLM API rejected the request");
            }
        }
        Ok(completion)
    }
}
