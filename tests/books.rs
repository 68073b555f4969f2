mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{count_rows, request, request_json, seed_book, seed_seller, test_app};

#[tokio::test]
async fn create_book_returns_created_row() {
    let (app, _db) = test_app().await;
    let seller_id = seed_seller(&app).await;

    let (status, book) = request_json(
        &app,
        "POST",
        "/api/v1/books/",
        Some(json!({
            "title": "How to sing if bear stepped on your ear",
            "author": "Buzova Olga",
            "year": 2022,
            "count_pages": 7,
            "seller_id": seller_id
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(book["id"].as_i64().is_some());
    assert_eq!(book["title"], "How to sing if bear stepped on your ear");
    assert_eq!(book["author"], "Buzova Olga");
    assert_eq!(book["year"], 2022);
    assert_eq!(book["pages"], 7);
    assert_eq!(book["seller_id"], seller_id);
}

#[tokio::test]
async fn create_book_defaults_page_count() {
    let (app, _db) = test_app().await;
    let seller_id = seed_seller(&app).await;

    let (status, book) = request_json(
        &app,
        "POST",
        "/api/v1/books/",
        Some(json!({
            "title": "Mtzyri",
            "author": "Lermontov",
            "year": 2023,
            "seller_id": seller_id
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(book["pages"], 150);
}

#[tokio::test]
async fn create_book_rejects_year_before_2020() {
    let (app, db) = test_app().await;
    let seller_id = seed_seller(&app).await;

    let (status, body) = request_json(
        &app,
        "POST",
        "/api/v1/books/",
        Some(json!({
            "title": "Old tome",
            "author": "Anon",
            "year": 1999,
            "seller_id": seller_id
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["details"][0]["field"], "year");
    assert_eq!(count_rows(&db, "books_table").await, 0);
}

#[tokio::test]
async fn create_book_for_missing_seller_returns_404() {
    let (app, db) = test_app().await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/v1/books/",
        Some(json!({
            "title": "Orphaned",
            "author": "Anon",
            "year": 2023,
            "seller_id": 9000
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(count_rows(&db, "books_table").await, 0);
}

#[tokio::test]
async fn list_books_returns_all_in_insertion_order() {
    let (app, _db) = test_app().await;
    let seller_id = seed_seller(&app).await;
    let first = seed_book(&app, seller_id).await;
    let second = seed_book(&app, seller_id).await;

    let (status, body) = request_json(&app, "GET", "/api/v1/books/", None).await;

    assert_eq!(status, StatusCode::OK);
    let books = body["books"].as_array().unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0]["id"].as_i64().unwrap(), first);
    assert_eq!(books[1]["id"].as_i64().unwrap(), second);
    assert_eq!(books[0]["title"], "Mtzyri");
    assert_eq!(books[0]["author"], "Lermontov");
    assert_eq!(books[0]["year"], 2023);
    assert_eq!(books[0]["pages"], 100);
    assert_eq!(books[0]["seller_id"], seller_id);
}

#[tokio::test]
async fn get_book_round_trips_all_fields() {
    let (app, _db) = test_app().await;
    let seller_id = seed_seller(&app).await;
    let book_id = seed_book(&app, seller_id).await;

    let (status, book) =
        request_json(&app, "GET", &format!("/api/v1/books/{book_id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(book["id"].as_i64().unwrap(), book_id);
    assert_eq!(book["title"], "Mtzyri");
    assert_eq!(book["pages"], 100);
}

#[tokio::test]
async fn get_missing_book_returns_404() {
    let (app, _db) = test_app().await;

    let (status, body) = request(&app, "GET", "/api/v1/books/9000", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn delete_book_removes_exactly_one_row() {
    let (app, db) = test_app().await;
    let seller_id = seed_seller(&app).await;
    let keep = seed_book(&app, seller_id).await;
    let doomed = seed_book(&app, seller_id).await;

    let (status, body) = request(&app, "DELETE", &format!("/api/v1/books/{doomed}"), None).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
    assert_eq!(count_rows(&db, "books_table").await, 1);

    let (status, _) = request(&app, "GET", &format!("/api/v1/books/{keep}"), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn delete_missing_book_changes_nothing() {
    let (app, db) = test_app().await;
    let seller_id = seed_seller(&app).await;
    let book_id = seed_book(&app, seller_id).await;

    let (status, _) = request(&app, "DELETE", &format!("/api/v1/books/{}", book_id + 1), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(count_rows(&db, "books_table").await, 1);
}

#[tokio::test]
async fn update_book_overwrites_every_mutable_field() {
    let (app, _db) = test_app().await;
    let first_seller = seed_seller(&app).await;
    let second_seller = seed_seller(&app).await;
    let book_id = seed_book(&app, first_seller).await;

    let (status, book) = request_json(
        &app,
        "PUT",
        &format!("/api/v1/books/{book_id}"),
        Some(json!({
            "title": "Mtzyri, revised",
            "author": "M. Lermontov",
            "year": 2024,
            "pages": 120,
            "seller_id": second_seller
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(book["id"].as_i64().unwrap(), book_id);
    assert_eq!(book["title"], "Mtzyri, revised");
    assert_eq!(book["author"], "M. Lermontov");
    assert_eq!(book["year"], 2024);
    assert_eq!(book["pages"], 120);
    assert_eq!(book["seller_id"], second_seller);
}

#[tokio::test]
async fn update_missing_book_leaves_storage_untouched() {
    let (app, _db) = test_app().await;
    let seller_id = seed_seller(&app).await;
    let book_id = seed_book(&app, seller_id).await;

    let (status, _) = request(
        &app,
        "PUT",
        &format!("/api/v1/books/{}", book_id + 1),
        Some(json!({
            "title": "Ghost",
            "author": "Nobody",
            "year": 2024,
            "pages": 1,
            "seller_id": seller_id
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, book) = request_json(&app, "GET", &format!("/api/v1/books/{book_id}"), None).await;
    assert_eq!(book["title"], "Mtzyri");
}
