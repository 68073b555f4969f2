pub mod models;
pub mod routes;

use async_trait::async_trait;
use axum::{
    routing::{get, post},
    Router,
};

use bookmart_db::Db;
use bookmart_kernel::{InitCtx, Migration, Module};

/// Books module: CRUD over `books_table`, owned by sellers.
pub struct BooksModule;

impl BooksModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router<Db> {
        Router::new()
            .route("/", post(routes::create_book).get(routes::list_books))
            .route(
                "/{book_id}",
                get(routes::get_book)
                    .put(routes::update_book)
                    .delete(routes::delete_book),
            )
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![Migration {
            id: "001_books_table",
            up: r#"
                CREATE TABLE IF NOT EXISTS books_table (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL,
                    author TEXT NOT NULL,
                    year INTEGER NOT NULL,
                    pages INTEGER NOT NULL,
                    seller_id INTEGER NOT NULL
                        REFERENCES sellers_table(id) ON DELETE CASCADE
                );
                "#,
        }]
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({
            "paths": {
                "/": {
                    "post": {
                        "summary": "Create a book for an existing seller",
                        "tags": ["Books"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/NewBook" }
                                }
                            }
                        },
                        "responses": {
                            "201": {
                                "description": "Created book",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Book" }
                                    }
                                }
                            },
                            "404": { "description": "Seller does not exist" },
                            "422": {
                                "description": "Validation error",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    },
                    "get": {
                        "summary": "List books",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "All books in insertion order",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "object",
                                            "properties": {
                                                "books": {
                                                    "type": "array",
                                                    "items": { "$ref": "#/components/schemas/Book" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/{book_id}": {
                    "get": {
                        "summary": "Fetch one book",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "Book",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Book" }
                                    }
                                }
                            },
                            "404": { "description": "Book does not exist" }
                        }
                    },
                    "put": {
                        "summary": "Replace every mutable field of a book",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "Updated book",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Book" }
                                    }
                                }
                            },
                            "404": { "description": "Book does not exist" }
                        }
                    },
                    "delete": {
                        "summary": "Delete a book",
                        "tags": ["Books"],
                        "responses": {
                            "204": { "description": "Deleted" },
                            "404": { "description": "Book does not exist" }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "integer" },
                            "title": { "type": "string" },
                            "author": { "type": "string" },
                            "year": { "type": "integer" },
                            "pages": { "type": "integer" },
                            "seller_id": { "type": "integer" }
                        },
                        "required": ["id", "title", "author", "year", "pages", "seller_id"]
                    },
                    "NewBook": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string" },
                            "author": { "type": "string" },
                            "year": { "type": "integer", "minimum": 2020 },
                            "count_pages": { "type": "integer", "default": 150 },
                            "seller_id": { "type": "integer" }
                        },
                        "required": ["title", "author", "year", "seller_id"]
                    }
                }
            }
        }))
    }
}
