use axum::extract::State;
use axum::Json;
use tracing::info;

use shellplan_core::Plan;

use crate::error::AppError;
use crate::state::AppState;

/// Request body for POST /api/chat.
#[derive(serde::Deserialize)]
pub struct ChatRequest {
    /// Free-text task description. Deliberately not validated: an empty
    /// message still produces exactly one generation call.
    pub message: String,
}

#[derive(serde::Serialize)]
pub struct ChatResponse {
    pub response: Plan,
}

/// POST /api/chat — forward the message to the generation service with the
/// active variant's fixed prompt and schema, validate the result, return it.
///
/// Exactly one outbound call per request; no retries. Any failure surfaces
/// as the handler's single 500 contract via [`AppError`].
pub async fn chat(
    State(app): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    info!(variant = %app.variant, chars = body.message.len(), "chat request");

    let value = app.generator.generate(app.variant, &body.message).await?;
    let plan = Plan::from_value(app.variant, value)?;
    plan.validate()?;

    info!(variant = %app.variant, "chat response validated");
    Ok(Json(ChatResponse { response: plan }))
}
