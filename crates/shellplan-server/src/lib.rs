pub mod embed;
pub mod error;
pub mod generate;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the axum Router with the API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chat", post(routes::chat::chat))
        .route("/api/config", get(routes::config::get_config))
        .fallback(embed::static_handler)
        .layer(cors)
        .with_state(state)
}

/// Start the shellplan web UI server. The frontend is a static page embedded
/// in the binary via rust-embed; there is no separate dev server.
pub async fn serve(state: AppState, port: u16, open_browser: bool) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("shellplan UI server listening on http://localhost:{port}");

    if open_browser {
        let url = format!("http://localhost:{port}");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
