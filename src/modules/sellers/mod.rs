pub mod models;
pub mod routes;

use async_trait::async_trait;
use axum::{
    routing::{get, post},
    Router,
};

use bookmart_db::Db;
use bookmart_kernel::{InitCtx, Migration, Module};

/// Sellers module: CRUD over `sellers_table`, the owning side of books.
pub struct SellersModule;

impl SellersModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for SellersModule {
    fn name(&self) -> &'static str {
        "sellers"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "sellers module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router<Db> {
        Router::new()
            .route("/", post(routes::create_seller).get(routes::list_sellers))
            .route(
                "/{seller_id}",
                get(routes::get_seller)
                    .put(routes::update_seller)
                    .delete(routes::delete_seller),
            )
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![Migration {
            id: "001_sellers_table",
            up: r#"
                CREATE TABLE IF NOT EXISTS sellers_table (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    first_name TEXT NOT NULL,
                    last_name TEXT NOT NULL,
                    email TEXT NOT NULL,
                    password TEXT NOT NULL
                );
                "#,
        }]
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({
            "paths": {
                "/": {
                    "post": {
                        "summary": "Register a seller",
                        "tags": ["Sellers"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/NewSeller" }
                                }
                            }
                        },
                        "responses": {
                            "201": {
                                "description": "Created seller; the password is never returned",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/SellerProfile" }
                                    }
                                }
                            },
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
                        "summary": "List sellers with their books",
                        "tags": ["Sellers"],
                        "responses": {
                            "200": {
                                "description": "All sellers, books nested",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "object",
                                            "properties": {
                                                "sellers": {
                                                    "type": "array",
                                                    "items": { "$ref": "#/components/schemas/SellerDetail" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/{seller_id}": {
                    "get": {
                        "summary": "Fetch one seller with its books",
                        "tags": ["Sellers"],
                        "responses": {
                            "200": {
                                "description": "Seller",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/SellerDetail" }
                                    }
                                }
                            },
                            "404": { "description": "Seller does not exist" }
                        }
                    },
                    "put": {
                        "summary": "Update names and email",
                        "tags": ["Sellers"],
                        "responses": {
                            "200": {
                                "description": "Updated seller",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/SellerProfile" }
                                    }
                                }
                            },
                            "404": { "description": "Seller does not exist" }
                        }
                    },
                    "delete": {
                        "summary": "Delete a seller and, by cascade, its books",
                        "tags": ["Sellers"],
                        "responses": {
                            "204": { "description": "Deleted" },
                            "404": { "description": "Seller does not exist" }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "SellerProfile": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "integer" },
                            "first_name": { "type": "string" },
                            "last_name": { "type": "string" },
                            "email": { "type": "string" }
                        },
                        "required": ["id", "first_name", "last_name", "email"]
                    },
                    "SellerDetail": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "integer" },
                            "first_name": { "type": "string" },
                            "last_name": { "type": "string" },
                            "email": { "type": "string" },
                            "books": {
                                "type": "array",
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "id": { "type": "integer" },
                                        "title": { "type": "string" },
                                        "author": { "type": "string" },
                                        "year": { "type": "integer" },
                                        "pages": { "type": "integer" }
                                    }
                                }
                            }
                        },
                        "required": ["id", "first_name", "last_name", "email", "books"]
                    },
                    "NewSeller": {
                        "type": "object",
                        "properties": {
                            "first_name": { "type": "string" },
                            "last_name": { "type": "string" },
                            "email": { "type": "string" },
                            "password": { "type": "string", "minLength": 8 }
                        },
                        "required": ["first_name", "last_name", "email", "password"]
                    }
                }
            }
        }))
    }
}
