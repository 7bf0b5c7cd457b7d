use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use tower::util::ServiceExt; // for `oneshot`

use bookstall::db;
use bookstall::server;
use bookstall::state::AppState;
use bookstall::storage::AssetStore;

const BOUNDARY: &str = "bookstall-test-boundary";

async fn setup_app_with_origins(allowed_origins: &[String]) -> Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    let root = std::env::temp_dir().join(format!("bookstall-test-{}", uuid::Uuid::new_v4()));
    server::build_router(AppState::new(db, AssetStore::new(root)), allowed_origins)
}

async fn setup_app() -> Router {
    setup_app_with_origins(&[]).await
}

fn multipart_body(fields: &[(&str, &str)], files: &[(&str, &str, &str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    for (name, file_name, content_type, bytes) in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn multipart_request(method: &str, uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn slider_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("title1", "Sale"),
        ("title2", "50% Off"),
        ("description", "Big sale"),
        ("redirect_url_text", "Shop now"),
    ]
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_check_responds_ok() {
    let app = setup_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn configured_cors_origins_restrict_responses() {
    let app =
        setup_app_with_origins(&["http://admin.example.com".to_string()]).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header(header::ORIGIN, "http://admin.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://admin.example.com")
    );

    // An origin outside the configured list gets no allow header
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header(header::ORIGIN, "http://elsewhere.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn empty_cors_config_leaves_api_open() {
    let app = setup_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header(header::ORIGIN, "http://anywhere.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn get_missing_slider_returns_404() {
    let app = setup_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/sliders/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_slider_via_multipart() {
    let app = setup_app().await;

    let body = multipart_body(
        &slider_fields(),
        &[("image_file", "banner.png", "image/png", &[0u8; 2048])],
    );
    let response = app
        .clone()
        .oneshot(multipart_request("POST", "/api/sliders", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = response_json(response).await;
    assert_eq!(json["title1"], "Sale");
    assert!(json["image_ref"].is_string());
    assert_eq!(json["is_active"], true);

    // The new slider shows up in the default (active-only) listing
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/sliders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["total"], 1);
}

#[tokio::test]
async fn oversized_upload_returns_field_error() {
    let app = setup_app().await;

    let oversized = vec![0u8; 3 * 1024 * 1024];
    let body = multipart_body(
        &slider_fields(),
        &[("image_file", "banner.jpg", "image/jpeg", &oversized)],
    );
    let response = app
        .oneshot(multipart_request("POST", "/api/sliders", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = response_json(response).await;
    assert_eq!(json["errors"]["image_file"], "File size must be less than 2MB");
}

#[tokio::test]
async fn deleting_active_slider_returns_conflict() {
    let app = setup_app().await;

    let body = multipart_body(
        &slider_fields(),
        &[("image_file", "banner.png", "image/png", &[0u8; 1024])],
    );
    let response = app
        .clone()
        .oneshot(multipart_request("POST", "/api/sliders", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = response_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/sliders/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Deactivate, then the hard delete goes through
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/api/sliders/{id}/toggle"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/sliders/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn author_crud_round_trip() {
    let app = setup_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/authors")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"full_name":"Ursula K. Le Guin"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = response_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/authors/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/authors/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_book_with_images_via_multipart() {
    let app = setup_app().await;

    // Reference data first
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/genres")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"Sci-Fi"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    let genre_id = response_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/authors")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"full_name":"Iain M. Banks"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    let author_id = response_json(response).await["id"].as_i64().unwrap();

    let genre_id = genre_id.to_string();
    let author_id = author_id.to_string();
    let fields: Vec<(&str, &str)> = vec![
        ("genre_id", &genre_id),
        ("author_id", &author_id),
        ("title", "Consider Phlebas"),
        ("book_code", "CULTURE-1"),
        ("cost_price", "4.00"),
        ("sale_price", "9.99"),
        ("stock_count", "25"),
    ];
    let body = multipart_body(
        &fields,
        &[
            ("image_files", "front.png", "image/png", &[0u8; 2048]),
            ("image_files", "back.jpg", "image/jpeg", &[0u8; 2048]),
        ],
    );
    let response = app
        .oneshot(multipart_request("POST", "/api/books", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = response_json(response).await;
    assert_eq!(json["title"], "Consider Phlebas");
    let images = json["images"].as_array().unwrap();
    assert_eq!(images.len(), 2);
    assert_eq!(images[0]["kind"], "cover");
    assert_eq!(images[1]["kind"], "detail");
}
