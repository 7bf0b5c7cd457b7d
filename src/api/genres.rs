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
pub struct CreateGenreRequest {
    pub name: String,
}

pub async fn list_genres(State(state): State<AppState>) -> Response {
    match catalog_service::list_genres(&state.db).await {
        Ok(genres) => (StatusCode::OK, Json(genres)).into_response(),
        Err(e) => super::error_response(e),
    }
}

pub async fn get_genre(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match catalog_service::get_genre(&state.db, id).await {
        Ok(genre) => (StatusCode::OK, Json(genre)).into_response(),
        Err(e) => super::error_response(e),
    }
}

pub async fn create_genre(
    State(state): State<AppState>,
    Json(payload): Json<CreateGenreRequest>,
) -> Response {
    match catalog_service::create_genre(&state.db, payload.name).await {
        Ok(genre) => (StatusCode::CREATED, Json(genre)).into_response(),
        Err(e) => super::error_response(e),
    }
}

pub async fn delete_genre(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match catalog_service::delete_genre(&state.db, id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Genre deleted successfully" })),
        )
            .into_response(),
        Err(e) => super::error_response(e),
    }
}
