use async_trait::async_trait;
use serde_json::Value;

use openai_agent::OpenAiClient;
use shellplan_core::SchemaVariant;

/// Seam between the HTTP handler and the external generation service.
///
/// One method, one outbound call. Handler tests substitute a counting stub
/// here; the live implementation wraps [`OpenAiClient`].
#[async_trait]
pub trait StructuredGenerator: Send + Sync {
    async fn generate(&self, variant: SchemaVariant, message: &str) -> anyhow::Result<Value>;
}

/// Live generator: binds a variant's fixed prompt and schema to the
/// chat-completions client.
pub struct OpenAiGenerator {
    client: OpenAiClient,
}

impl OpenAiGenerator {
    pub fn new(client: OpenAiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StructuredGenerator for OpenAiGenerator {
    async fn generate(&self, variant: SchemaVariant, message: &str) -> anyhow::Result<Value> {
        let value = self
            .client
            .structured(
                variant.system_prompt(),
                message,
                variant.schema_name(),
                variant.response_schema(),
            )
            .await?;
        Ok(value)
    }
}
