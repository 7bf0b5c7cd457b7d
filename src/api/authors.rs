use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::services::catalog_service;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateAuthorRequest {
    pub full_name: String,
}

pub async fn list_authors(State(state): State<AppState>) -> Response {
    match catalog_service::list_authors(&state.db).await {
        Ok(authors) => (StatusCode::OK, Json(authors)).into_response(),
        Err(e) => super::error_response(e),
    }
}

pub async fn get_author(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match catalog_service::get_author(&state.db, id).await {
        Ok(author) => (StatusCode::OK, Json(author)).into_response(),
        Err(e) => super::error_response(e),
    }
}

pub async fn create_author(
    State(state): State<AppState>,
    Json(payload): Json<CreateAuthorRequest>,
) -> Response {
    match catalog_service::create_author(&state.db, payload.full_name).await {
        Ok(author) => (StatusCode::CREATED, Json(author)).into_response(),
        Err(e) => super::error_response(e),
    }
}

pub async fn delete_author(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match catalog_service::delete_author(&state.db, id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Author deleted successfully" })),
        )
            .into_response(),
        Err(e) => super::error_response(e),
    }
}
