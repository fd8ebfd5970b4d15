use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenAiAgentError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("completion contained no choices")]
    NoChoices,

    #[error("model refused the request: {0}")]
    Refusal(String),

    #[error("completion choice carried no content")]
    NoContent,

    #[error("failed to parse structured content: {source}\n  content: {content}")]
    Content {
        content: String,
        #[source]
        source: serde_json::Error,
    },
}
