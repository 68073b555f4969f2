use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bookmart_http::error::FieldError;

/// Oldest publication year accepted at creation time.
pub const MIN_PUBLICATION_YEAR: i64 = 2020;

const DEFAULT_PAGES: i64 = 150;

/// A book row as stored, and as returned on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i64,
    pub pages: i64,
    pub seller_id: i64,
}

/// Payload for creating a book. The page count arrives under the
/// `count_pages` wire name and defaults to 150 when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i64,
    #[serde(rename = "count_pages", default = "default_pages")]
    pub pages: i64,
    pub seller_id: i64,
}

fn default_pages() -> i64 {
    DEFAULT_PAGES
}

impl NewBook {
    /// Field-level checks. The boundary layer turns failures into a 422.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.year < MIN_PUBLICATION_YEAR {
            errors.push(FieldError::new("year", "Year is too old"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Full-replacement payload for updating a book.
#[derive(Debug, Clone, Deserialize)]
pub struct BookUpdate {
    pub title: String,
    pub author: String,
    pub year: i64,
    pub pages: i64,
    pub seller_id: i64,
}

/// Response envelope for the list endpoint.
#[derive(Debug, Serialize)]
pub struct BookList {
    pub books: Vec<Book>,
}
