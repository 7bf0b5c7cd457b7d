// Server module - builds the HTTP surface around the API router

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::state::AppState;

/// CORS policy from the configured origin list. An empty list leaves
/// the API open; unparseable entries are logged and skipped.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let mut origins = Vec::new();
    for origin in allowed_origins {
        match origin.parse::<HeaderValue>() {
            Ok(v) => origins.push(v),
            Err(e) => tracing::error!("Failed to parse CORS origin '{}': {}", origin, e),
        }
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the application router: the JSON/multipart API under `/api`
/// and the uploaded-asset directory served under `/content`.
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    let content_dir = ServeDir::new(state.assets.root());
    let api_router = api::api_router(state);

    Router::new()
        .nest("/api", api_router)
        .nest_service("/content", content_dir)
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState, port: u16, allowed_origins: &[String]) -> std::io::Result<()> {
    let app = build_router(state, allowed_origins);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}
