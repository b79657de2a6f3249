//! OpenAI implementation of the GenerativeModel trait.
//!
//! A reference implementation over the chat completions endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use flashcards::ai::OpenAI;
//!
//! let model = OpenAI::new("sk-...").with_model("gpt-4o-mini");
//! let pipeline = Pipeline::new(config, analyzer, Some(Arc::new(model)))?;
//! ```

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, ModelError};
use crate::traits::model::{CompletionOptions, GenerativeModel};

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI-based generative model.
#[derive(Clone)]
pub struct OpenAI {
    client: Client,
    api_key: SecretString,
    model: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl OpenAI {
    /// Create a new OpenAI client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: SecretString::from(api_key.into()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENAI_API_KEY"))?;
        Ok(Self::new(api_key))
    }

    /// Set the chat model (default: gpt-3.5-turbo).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Bound every request by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for OpenAI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAI")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[async_trait]
impl GenerativeModel for OpenAI {
    async fn complete(
        &self,
        prompt: &str,
        options: CompletionOptions,
    ) -> Result<String, ModelError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        let mut builder = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| ModelError::Malformed(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(ModelError::EmptyResponse)?;

        debug!(model = %self.model, response_len = content.len(), "Chat completion received");
        Ok(content)
    }
}

fn transport_error(e: reqwest::Error) -> ModelError {
    if e.is_timeout() {
        ModelError::Timeout
    } else {
        ModelError::Unreachable(Box::new(e))
    }
}

// Request/response types

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_and_overrides() {
        let model = OpenAI::new("sk-test");
        assert_eq!(model.model(), "gpt-3.5-turbo");
        assert_eq!(model.base_url(), "https://api.openai.com/v1");

        let model = model
            .with_model("gpt-4o-mini")
            .with_base_url("http://localhost:8080/v1/")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(model.model(), "gpt-4o-mini");
        assert_eq!(model.base_url(), "http://localhost:8080/v1");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let debug = format!("{:?}", OpenAI::new("sk-very-secret"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("sk-very-secret"));
    }

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            model: "gpt-3.5-turbo",
            messages: vec![ChatMessage {
                role: "user",
                content: "hi",
            }],
            temperature: 0.5,
            max_tokens: 500,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["max_tokens"], 500);
    }

    #[test]
    fn test_null_content_deserializes() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert!(response.choices[0].message.content.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        // Port 9 (discard) is closed on test machines.
        let model = OpenAI::new("sk-test")
            .with_base_url("http://127.0.0.1:9/v1")
            .with_timeout(Duration::from_secs(2));

        let result = model.complete("prompt", CompletionOptions::default()).await;
        assert!(matches!(
            result,
            Err(ModelError::Unreachable(_)) | Err(ModelError::Timeout)
        ));
    }
}
