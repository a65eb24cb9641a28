//! OllamaClient - REST API implementation for a local Ollama host.
//!
//! Talks to `POST {base_url}/api/chat` with streaming disabled and maps any
//! transport, status, or decode failure into a single model-client error
//! class. No retry and no timeout: a slow host blocks the turn.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use jargon_core::{JargonError, Message, ModelId, Result};

use crate::client::{ModelClient, SamplingOptions};

const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Client for a locally hosted Ollama instance.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OllamaClient {
    /// Creates a client against the default local host.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the base URL after construction.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send_request(&self, body: &ChatRequest<'_>) -> Result<ChatResponse> {
        let url = format!("{}/api/chat", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|err| JargonError::model_client(format!("Ollama request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Ollama error body".to_string());
            return Err(JargonError::model_client(format!(
                "Ollama returned {status}: {body_text}"
            )));
        }

        response
            .json()
            .await
            .map_err(|err| JargonError::model_client(format!("Failed to parse Ollama response: {err}")))
    }
}

#[async_trait]
impl ModelClient for OllamaClient {
    async fn chat(
        &self,
        model: ModelId,
        messages: &[Message],
        options: SamplingOptions,
    ) -> Result<Message> {
        let request = ChatRequest {
            model: model.as_str(),
            messages,
            stream: false,
            options: RequestOptions {
                temperature: options.temperature,
            },
        };

        tracing::debug!(model = model.as_str(), messages = messages.len(), "sending chat request");
        let parsed = self.send_request(&request).await?;

        // Ollama pads completions with surrounding whitespace.
        let content = parsed.message.content.trim().to_string();
        Ok(Message {
            role: parsed.message.role,
            content,
        })
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    stream: bool,
    options: RequestOptions,
}

#[derive(Serialize)]
struct RequestOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: Message,
}

#[cfg(test)]
mod tests {
    use super::*;
    use jargon_core::Role;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = OllamaClient::new().with_base_url("http://10.0.0.5:11434/");
        assert_eq!(client.base_url(), "http://10.0.0.5:11434");
    }

    #[test]
    fn test_request_wire_shape() {
        let messages = vec![Message::user("Who wins the midfield?")];
        let request = ChatRequest {
            model: ModelId::Llama3.as_str(),
            messages: &messages,
            stream: false,
            options: RequestOptions { temperature: 0.5 },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3:8b");
        assert_eq!(json["stream"], false);
        assert_eq!(json["options"]["temperature"], 0.5);
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn test_response_decodes_message() {
        let body = r#"{
            "model": "gemma3:latest",
            "message": {"role": "assistant", "content": "High press wins possession\n"},
            "done": true
        }"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.message.role, Role::Assistant);
        assert_eq!(parsed.message.content, "High press wins possession\n");
    }
}
