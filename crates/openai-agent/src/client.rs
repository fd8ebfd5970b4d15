use std::time::Duration;

use serde_json::Value;

use crate::error::OpenAiAgentError;
use crate::types::{ApiErrorBody, ChatCompletion, ChatMessage, ChatRequest, ResponseFormat};
use crate::Result;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Connection settings for [`OpenAiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Credential, if present in the environment. Checked at call time.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Read `OPENAI_API_KEY` and `OPENAI_BASE_URL` from the process
    /// environment. A missing key is not an error here — requests made
    /// without one fail at call time.
    pub fn from_env(model: impl Into<String>) -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY").ok(),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            model: model.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Client for an OpenAI-compatible chat-completions endpoint, fixed to
/// structured (schema-constrained) output.
pub struct OpenAiClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, http })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Issue one structured generation call and return the parsed content.
    ///
    /// The system prompt and schema are the fixed constraints; `message` is
    /// the only variable input. No retries, no partial-result handling: a
    /// single POST, then success or a typed error.
    pub async fn structured(
        &self,
        system_prompt: &str,
        message: &str,
        schema_name: &str,
        schema: Value,
    ) -> Result<Value> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(OpenAiAgentError::MissingApiKey)?;

        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let body = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(message),
            ],
            response_format: ResponseFormat::strict(schema_name, schema),
        };

        tracing::debug!(model = %self.config.model, schema = schema_name, "structured generation request");
        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|b| b.error.message)
                .unwrap_or(text);
            return Err(OpenAiAgentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletion = response.json().await?;
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(OpenAiAgentError::NoChoices)?;

        if let Some(refusal) = choice.message.refusal.filter(|r| !r.is_empty()) {
            return Err(OpenAiAgentError::Refusal(refusal));
        }

        let content = choice.message.content.ok_or(OpenAiAgentError::NoContent)?;
        serde_json::from_str(&content).map_err(|source| OpenAiAgentError::Content {
            content,
            source,
        })
    }
}
