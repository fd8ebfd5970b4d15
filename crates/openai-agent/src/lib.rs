//! `openai-agent` — minimal client for OpenAI-compatible structured
//! generation.
//!
//! One operation: send a system prompt, a user message, and a JSON Schema to
//! `POST {base}/chat/completions` with `response_format: json_schema` in
//! strict mode, and hand back the parsed content value.
//!
//! ```text
//! ClientConfig          ← model, base URL, credential from the environment
//!     │
//!     ▼
//! OpenAiClient          ← reqwest::Client with a request timeout
//!     │
//!     ▼
//! structured(...)       ← exactly one POST per call; no retries
//! ```
//!
//! The credential is carried as an `Option` and only checked when a call is
//! made; a missing `OPENAI_API_KEY` fails the request, not the startup.

pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::{ClientConfig, OpenAiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::OpenAiAgentError;

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, OpenAiAgentError>;
