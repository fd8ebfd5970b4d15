use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Unified error type for HTTP responses.
///
/// The endpoint's failure contract is a single undifferentiated
/// `500 { "error": ... }` — network failure, API error, and schema-validation
/// mismatch all collapse into it. The cause chain is logged server-side; the
/// body carries a stable message so upstream exception text never reaches
/// clients.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

pub const GENERIC_ERROR: &str = "generation request failed";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Full chain (anyhow's alternate Display) goes to the log only.
        let chain = format!("{:#}", self.0);
        tracing::error!(error = %chain, "request failed");
        let body = serde_json::json!({ "error": GENERIC_ERROR });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
