//! Thin OpenAI chat-completions client.
//!
//! One operation: messages in, text out. No tools, no streaming, no
//! embeddings; the analyst needs none of them.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{AnalysisError, Result};
use crate::generator::TextGenerator;
use crate::types::{ChatRequest, ChatResponseRaw, Message};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o";

/// Chat-completions client carrying its credential explicitly.
///
/// The API key is injected at construction and scoped to this instance;
/// nothing reads the process environment.
#[derive(Clone)]
pub struct OpenAiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Set a custom base URL (for proxies, compatible endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model used for completions.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Send a chat completion request and return the first choice's text.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<String> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "chat completion request failed");
                AnalysisError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "chat completion API error");
            return Err(AnalysisError::Api(format!(
                "chat completion error: {}",
                error_text
            )));
        }

        let raw: ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| AnalysisError::Parse(e.to_string()))?;

        let content = raw
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AnalysisError::Api("empty completion response".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "chat completion"
        );

        Ok(content)
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn generate(&self, system: &str, prompt: &str, temperature: f32) -> Result<String> {
        let request = ChatRequest::new(&self.model)
            .message(Message::system(system))
            .message(Message::user(prompt))
            .temperature(temperature);

        self.chat_completion(request).await
    }
}
