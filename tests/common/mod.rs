#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use bookmart_app::modules;
use bookmart_db::Db;
use bookmart_kernel::{settings::Settings, ModuleRegistry};

/// Build the production router against a fresh in-memory database.
///
/// A single pooled connection keeps every request on the same in-memory
/// store.
pub async fn test_app() -> (Router, Db) {
    let db = Db::connect("sqlite::memory:", 1).await.unwrap();

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);

    let migrations = registry.collect_migrations();
    db.create_schema(migrations.iter().map(|(_, m)| m.up))
        .await
        .unwrap();

    let settings = Settings::default();
    let app = bookmart_http::build_router(&registry, &settings, db.clone());
    (app, db)
}

/// Fire one request and return the status with the raw body.
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

/// Fire one request and decode the JSON body (null when the body is empty).
pub async fn request_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = request(app, method, uri, body).await;
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Register a seller through the API and return its generated id.
pub async fn seed_seller(app: &Router) -> i64 {
    let (status, seller) = request_json(
        app,
        "POST",
        "/api/v1/sellers/",
        Some(serde_json::json!({
            "first_name": "Olga",
            "last_name": "Buzova",
            "email": "best_singer@mail.com",
            "password": "malo_poloviN!"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    seller["id"].as_i64().unwrap()
}

/// Create a book for the given seller through the API and return its id.
pub async fn seed_book(app: &Router, seller_id: i64) -> i64 {
    let (status, book) = request_json(
        app,
        "POST",
        "/api/v1/books/",
        Some(serde_json::json!({
            "title": "Mtzyri",
            "author": "Lermontov",
            "year": 2023,
            "count_pages": 100,
            "seller_id": seller_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    book["id"].as_i64().unwrap()
}

/// Count rows in a table straight from the pool.
pub async fn count_rows(db: &Db, table: &str) -> i64 {
    let row: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(db.pool())
        .await
        .unwrap();
    row.0
}
