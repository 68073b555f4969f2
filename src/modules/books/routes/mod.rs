//! Book route handlers. Each handler runs one unit of work against the
//! shared database handle and commits on the success path.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use bookmart_db::Db;
use bookmart_http::error::AppError;

use super::models::{Book, BookList, BookUpdate, NewBook};

/// `POST /` — create a book for an existing seller.
pub async fn create_book(
    State(db): State<Db>,
    Json(payload): Json<NewBook>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    payload.validate()?;

    let mut session = db.session().await?;

    let seller: Option<(i64,)> = sqlx::query_as("SELECT id FROM sellers_table WHERE id = $1")
        .bind(payload.seller_id)
        .fetch_optional(session.conn())
        .await?;
    if seller.is_none() {
        return Err(AppError::not_found(format!(
            "seller {} does not exist",
            payload.seller_id
        )));
    }

    let book: Book = sqlx::query_as(
        "INSERT INTO books_table (title, author, year, pages, seller_id) \
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(&payload.title)
    .bind(&payload.author)
    .bind(payload.year)
    .bind(payload.pages)
    .bind(payload.seller_id)
    .fetch_one(session.conn())
    .await?;

    session.commit().await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// `GET /` — list every book in insertion order.
pub async fn list_books(State(db): State<Db>) -> Result<Json<BookList>, AppError> {
    let mut session = db.session().await?;

    let books: Vec<Book> = sqlx::query_as("SELECT * FROM books_table ORDER BY id")
        .fetch_all(session.conn())
        .await?;

    session.commit().await?;
    Ok(Json(BookList { books }))
}

/// `GET /{id}`
pub async fn get_book(
    State(db): State<Db>,
    Path(book_id): Path<i64>,
) -> Result<Json<Book>, AppError> {
    let mut session = db.session().await?;

    let book: Option<Book> = sqlx::query_as("SELECT * FROM books_table WHERE id = $1")
        .bind(book_id)
        .fetch_optional(session.conn())
        .await?;

    session.commit().await?;
    match book {
        Some(book) => Ok(Json(book)),
        None => Err(AppError::not_found(format!("book {book_id} does not exist"))),
    }
}

/// `PUT /{id}` — overwrite every mutable field, including ownership.
pub async fn update_book(
    State(db): State<Db>,
    Path(book_id): Path<i64>,
    Json(payload): Json<BookUpdate>,
) -> Result<Json<Book>, AppError> {
    let mut session = db.session().await?;

    let book: Option<Book> = sqlx::query_as(
        "UPDATE books_table SET title = $2, author = $3, year = $4, pages = $5, seller_id = $6 \
         WHERE id = $1 RETURNING *",
    )
    .bind(book_id)
    .bind(&payload.title)
    .bind(&payload.author)
    .bind(payload.year)
    .bind(payload.pages)
    .bind(payload.seller_id)
    .fetch_optional(session.conn())
    .await?;

    match book {
        Some(book) => {
            session.commit().await?;
            Ok(Json(book))
        }
        None => Err(AppError::not_found(format!("book {book_id} does not exist"))),
    }
}

/// `DELETE /{id}`
pub async fn delete_book(
    State(db): State<Db>,
    Path(book_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut session = db.session().await?;

    let deleted = sqlx::query("DELETE FROM books_table WHERE id = $1")
        .bind(book_id)
        .execute(session.conn())
        .await?;

    if deleted.rows_affected() == 0 {
        return Err(AppError::not_found(format!("book {book_id} does not exist")));
    }

    session.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
