use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;

use super::forms::FormData;
use crate::models::slider::SliderInput;
use crate::services::slider_service::{self, SliderFilter};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListParams {
    pub include_inactive: Option<bool>,
}

fn slider_input(form: &FormData) -> SliderInput {
    SliderInput {
        title1: form.text("title1"),
        title2: form.text("title2"),
        description: form.text("description"),
        redirect_url: form.opt_text("redirect_url"),
        redirect_url_text: form.text("redirect_url_text"),
    }
}

pub async fn list_sliders(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Response {
    let filter = SliderFilter {
        active_only: !params.include_inactive.unwrap_or(false),
    };
    match slider_service::list(&state.db, filter).await {
        Ok(sliders) => {
            let total = sliders.len();
            (
                StatusCode::OK,
                Json(json!({ "sliders": sliders, "total": total })),
            )
                .into_response()
        }
        Err(e) => super::error_response(e),
    }
}

pub async fn get_slider(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match slider_service::get(&state.db, id).await {
        Ok(slider) => (StatusCode::OK, Json(slider)).into_response(),
        Err(e) => super::error_response(e),
    }
}

pub async fn create_slider(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let form = match FormData::read(&mut multipart).await {
        Ok(form) => form,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": e }))).into_response();
        }
    };

    let input = slider_input(&form);
    let file = form.file("image_file");

    match slider_service::create(&state.db, &state.assets, input, file).await {
        Ok(slider) => (StatusCode::CREATED, Json(slider)).into_response(),
        Err(e) => super::error_response(e),
    }
}

pub async fn update_slider(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> Response {
    let form = match FormData::read(&mut multipart).await {
        Ok(form) => form,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": e }))).into_response();
        }
    };

    let input = slider_input(&form);
    let file = form.file("image_file");

    match slider_service::update(&state.db, &state.assets, id, input, file).await {
        Ok(slider) => (StatusCode::OK, Json(slider)).into_response(),
        Err(e) => super::error_response(e),
    }
}

pub async fn toggle_slider(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match slider_service::soft_delete(&state.db, id).await {
        Ok(slider) => (StatusCode::OK, Json(slider)).into_response(),
        Err(e) => super::error_response(e),
    }
}

pub async fn delete_slider(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match slider_service::delete(&state.db, &state.assets, id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Slider deleted successfully" })),
        )
            .into_response(),
        Err(e) => super::error_response(e),
    }
}
