pub mod authors;
pub mod books;
pub mod forms;
pub mod genres;
pub mod health;
pub mod sliders;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, patch},
    Router,
};
use serde_json::json;

use crate::domain::ServiceError;
use crate::state::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Sliders
        .route(
            "/sliders",
            get(sliders::list_sliders).post(sliders::create_slider),
        )
        .route(
            "/sliders/:id",
            get(sliders::get_slider)
                .put(sliders::update_slider)
                .delete(sliders::delete_slider),
        )
        .route("/sliders/:id/toggle", patch(sliders::toggle_slider))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route("/books/:id/toggle", patch(books::toggle_book))
        // Authors
        .route(
            "/authors",
            get(authors::list_authors).post(authors::create_author),
        )
        .route(
            "/authors/:id",
            get(authors::get_author).delete(authors::delete_author),
        )
        // Genres
        .route("/genres", get(genres::list_genres).post(genres::create_genre))
        .route(
            "/genres/:id",
            get(genres::get_genre).delete(genres::delete_genre),
        )
        // Uploads are policy-checked downstream; the transport limit only
        // needs to be high enough for a rejectable oversized file
        .layer(DefaultBodyLimit::max(16 * 1024 * 1024))
        .with_state(state)
}

/// Map a service error onto an HTTP response.
///
/// Validation and policy failures carry their messages through;
/// infrastructure faults are logged and answered generically.
pub(crate) fn error_response(err: ServiceError) -> Response {
    match err {
        ServiceError::Invalid(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "errors": errors })),
        )
            .into_response(),
        ServiceError::NotFound(kind) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("{} not found", kind) })),
        )
            .into_response(),
        ServiceError::Policy(msg) => {
            (StatusCode::CONFLICT, Json(json!({ "error": msg }))).into_response()
        }
        ServiceError::Database(msg) => {
            tracing::error!("Database failure: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response()
        }
        ServiceError::Asset(msg) => {
            tracing::error!("Asset storage failure: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "File storage failed" })),
            )
                .into_response()
        }
    }
}
