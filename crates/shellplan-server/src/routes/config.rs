use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// GET /api/config — the active schema variant and model name, so the
/// embedded UI can pick the right renderer without hardcoding either.
pub async fn get_config(State(app): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "variant": app.variant.as_str(),
        "model": app.model,
    }))
}
