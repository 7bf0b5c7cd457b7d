use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;

use super::forms::FormData;
use crate::domain::FieldErrors;
use crate::models::book::BookInput;
use crate::services::book_service::{self, BookFilter, BookInclude};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListParams {
    pub genre_id: Option<i32>,
    pub author_id: Option<i32>,
    pub title: Option<String>,
    pub include_inactive: Option<bool>,
}

fn parse_i32(
    form: &FormData,
    field: &'static str,
    label: &str,
    errors: &mut FieldErrors,
) -> i32 {
    let raw = form.text(field);
    if raw.trim().is_empty() {
        errors.push(field, format!("{} is required", label));
        return 0;
    }
    match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            errors.push(field, format!("{} must be a whole number", label));
            0
        }
    }
}

fn parse_f64(
    form: &FormData,
    field: &'static str,
    label: &str,
    errors: &mut FieldErrors,
) -> f64 {
    let raw = form.text(field);
    if raw.trim().is_empty() {
        errors.push(field, format!("{} is required", label));
        return 0.0;
    }
    match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            errors.push(field, format!("{} must be a number", label));
            0.0
        }
    }
}

fn parse_opt_f64(
    form: &FormData,
    field: &'static str,
    label: &str,
    errors: &mut FieldErrors,
) -> Option<f64> {
    let raw = form.opt_text(field)?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            errors.push(field, format!("{} must be a number", label));
            None
        }
    }
}

fn parse_flag(form: &FormData, field: &str, default: bool) -> bool {
    match form.opt_text(field).as_deref() {
        Some("true") | Some("1") | Some("on") => true,
        Some("false") | Some("0") | Some("off") => false,
        _ => default,
    }
}

fn book_input(form: &FormData) -> Result<BookInput, FieldErrors> {
    let mut errors = FieldErrors::new();

    let input = BookInput {
        genre_id: parse_i32(form, "genre_id", "Genre", &mut errors),
        author_id: parse_i32(form, "author_id", "Author", &mut errors),
        title: form.text("title"),
        description: form.opt_text("description"),
        book_code: form.text("book_code"),
        cost_price: parse_f64(form, "cost_price", "Cost price", &mut errors),
        sale_price: parse_f64(form, "sale_price", "Sale price", &mut errors),
        discount_percent: parse_opt_f64(form, "discount_percent", "Discount", &mut errors),
        is_featured: parse_flag(form, "is_featured", false),
        is_new: parse_flag(form, "is_new", false),
        is_best_seller: parse_flag(form, "is_best_seller", false),
        is_available: parse_flag(form, "is_available", true),
        stock_count: parse_i32(form, "stock_count", "Stock count", &mut errors),
    };

    if errors.is_empty() {
        Ok(input)
    } else {
        Err(errors)
    }
}

pub async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Response {
    let filter = BookFilter {
        genre_id: params.genre_id,
        author_id: params.author_id,
        title: params.title,
        active_only: !params.include_inactive.unwrap_or(false),
    };
    let includes = [BookInclude::Images, BookInclude::Author, BookInclude::Genre];

    match book_service::list(&state.db, filter, &includes).await {
        Ok(books) => {
            let total = books.len();
            (
                StatusCode::OK,
                Json(json!({ "books": books, "total": total })),
            )
                .into_response()
        }
        Err(e) => super::error_response(e),
    }
}

pub async fn get_book(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match book_service::get(&state.db, id).await {
        Ok(book) => (StatusCode::OK, Json(book)).into_response(),
        Err(e) => super::error_response(e),
    }
}

pub async fn create_book(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let form = match FormData::read(&mut multipart).await {
        Ok(form) => form,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": e }))).into_response();
        }
    };

    let input = match book_input(&form) {
        Ok(input) => input,
        Err(errors) => return super::error_response(errors.into()),
    };
    let files = form.files("image_files");

    match book_service::create(&state.db, &state.assets, input, files).await {
        Ok(book) => (StatusCode::CREATED, Json(book)).into_response(),
        Err(e) => super::error_response(e),
    }
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<BookInput>,
) -> Response {
    match book_service::update(&state.db, id, input).await {
        Ok(book) => (StatusCode::OK, Json(book)).into_response(),
        Err(e) => super::error_response(e),
    }
}

pub async fn toggle_book(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match book_service::soft_delete(&state.db, id).await {
        Ok(book) => (StatusCode::OK, Json(book)).into_response(),
        Err(e) => super::error_response(e),
    }
}

pub async fn delete_book(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match book_service::delete(&state.db, &state.assets, id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Book deleted successfully" })),
        )
            .into_response(),
        Err(e) => super::error_response(e),
    }
}
