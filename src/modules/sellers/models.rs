use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bookmart_http::error::FieldError;

use crate::modules::books::models::Book;

/// Characters of which at least one must appear in a password.
pub const PASSWORD_SPECIAL_CHARS: &str = "!?@#$%^&*()";

const MIN_PASSWORD_LEN: usize = 8;

/// Seller attributes exposed on the wire. The stored password never appears
/// in any response shape.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SellerProfile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// A seller together with its owned books.
#[derive(Debug, Serialize)]
pub struct SellerDetail {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub books: Vec<SellerBook>,
}

impl SellerDetail {
    pub fn new(profile: SellerProfile, books: Vec<SellerBook>) -> Self {
        Self {
            id: profile.id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            books,
        }
    }
}

/// Book summary nested under a seller: carries its own id, not the owner's.
#[derive(Debug, Clone, Serialize)]
pub struct SellerBook {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i64,
    pub pages: i64,
}

impl From<Book> for SellerBook {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            year: book.year,
            pages: book.pages,
        }
    }
}

/// Payload for registering a seller.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSeller {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl NewSeller {
    /// Field-level checks. The boundary layer turns failures into a 422.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(FieldError::new("password", "Password is too short"));
        } else if !self
            .password
            .chars()
            .any(|c| PASSWORD_SPECIAL_CHARS.contains(c))
        {
            errors.push(FieldError::new(
                "password",
                "Password has no special characters",
            ));
        }

        if !self.email.contains('@') {
            errors.push(FieldError::new("email", "Email is not valid"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Update payload: names and email only. Password and id are immutable
/// after creation.
#[derive(Debug, Clone, Deserialize)]
pub struct SellerUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Response envelope for the list endpoint.
#[derive(Debug, Serialize)]
pub struct SellerList {
    pub sellers: Vec<SellerDetail>,
}
