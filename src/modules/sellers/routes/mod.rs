//! Seller route handlers. Related books are composed with explicit queries
//! at the call site rather than mapped relationships.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use bookmart_db::Db;
use bookmart_http::error::AppError;

use super::models::{NewSeller, SellerBook, SellerDetail, SellerList, SellerProfile, SellerUpdate};
use crate::modules::books::models::Book;

/// `POST /` — register a seller. The password is persisted as given and
/// never returned.
pub async fn create_seller(
    State(db): State<Db>,
    Json(payload): Json<NewSeller>,
) -> Result<(StatusCode, Json<SellerProfile>), AppError> {
    payload.validate()?;

    let mut session = db.session().await?;

    let seller: SellerProfile = sqlx::query_as(
        "INSERT INTO sellers_table (first_name, last_name, email, password) \
         VALUES ($1, $2, $3, $4) RETURNING id, first_name, last_name, email",
    )
    .bind(&payload.first_name)
    .bind(&payload.last_name)
    .bind(&payload.email)
    .bind(&payload.password)
    .fetch_one(session.conn())
    .await?;

    session.commit().await?;
    Ok((StatusCode::CREATED, Json(seller)))
}

/// `GET /` — list sellers with their books nested.
pub async fn list_sellers(State(db): State<Db>) -> Result<Json<SellerList>, AppError> {
    let mut session = db.session().await?;

    let profiles: Vec<SellerProfile> =
        sqlx::query_as("SELECT id, first_name, last_name, email FROM sellers_table ORDER BY id")
            .fetch_all(session.conn())
            .await?;

    let books: Vec<Book> = sqlx::query_as("SELECT * FROM books_table ORDER BY id")
        .fetch_all(session.conn())
        .await?;

    session.commit().await?;

    let mut by_seller: HashMap<i64, Vec<SellerBook>> = HashMap::new();
    for book in books {
        by_seller
            .entry(book.seller_id)
            .or_default()
            .push(SellerBook::from(book));
    }

    let sellers = profiles
        .into_iter()
        .map(|profile| {
            let books = by_seller.remove(&profile.id).unwrap_or_default();
            SellerDetail::new(profile, books)
        })
        .collect();

    Ok(Json(SellerList { sellers }))
}

/// `GET /{id}` — one seller with its books, fetched by a second query.
pub async fn get_seller(
    State(db): State<Db>,
    Path(seller_id): Path<i64>,
) -> Result<Json<SellerDetail>, AppError> {
    let mut session = db.session().await?;

    let profile: Option<SellerProfile> =
        sqlx::query_as("SELECT id, first_name, last_name, email FROM sellers_table WHERE id = $1")
            .bind(seller_id)
            .fetch_optional(session.conn())
            .await?;

    let Some(profile) = profile else {
        return Err(AppError::not_found(format!(
            "seller {seller_id} does not exist"
        )));
    };

    let books: Vec<Book> =
        sqlx::query_as("SELECT * FROM books_table WHERE seller_id = $1 ORDER BY id")
            .bind(seller_id)
            .fetch_all(session.conn())
            .await?;

    session.commit().await?;

    let books = books.into_iter().map(SellerBook::from).collect();
    Ok(Json(SellerDetail::new(profile, books)))
}

/// `PUT /{id}` — overwrite names and email; password and id are immutable.
pub async fn update_seller(
    State(db): State<Db>,
    Path(seller_id): Path<i64>,
    Json(payload): Json<SellerUpdate>,
) -> Result<Json<SellerProfile>, AppError> {
    let mut session = db.session().await?;

    let seller: Option<SellerProfile> = sqlx::query_as(
        "UPDATE sellers_table SET first_name = $2, last_name = $3, email = $4 \
         WHERE id = $1 RETURNING id, first_name, last_name, email",
    )
    .bind(seller_id)
    .bind(&payload.first_name)
    .bind(&payload.last_name)
    .bind(&payload.email)
    .fetch_optional(session.conn())
    .await?;

    match seller {
        Some(seller) => {
            session.commit().await?;
            Ok(Json(seller))
        }
        None => Err(AppError::not_found(format!(
            "seller {seller_id} does not exist"
        ))),
    }
}

/// `DELETE /{id}` — remove the seller; owned books cascade away with it.
pub async fn delete_seller(
    State(db): State<Db>,
    Path(seller_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut session = db.session().await?;

    let deleted = sqlx::query("DELETE FROM sellers_table WHERE id = $1")
        .bind(seller_id)
        .execute(session.conn())
        .await?;

    if deleted.rows_affected() == 0 {
        return Err(AppError::not_found(format!(
            "seller {seller_id} does not exist"
        )));
    }

    session.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
