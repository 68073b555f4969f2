use async_trait::async_trait;
use axum::Router;

use bookmart_db::Db;

/// Context provided to modules during initialization.
pub struct InitCtx<'a> {
    pub settings: &'a crate::settings::Settings,
    pub db: &'a Db,
}

/// Schema definition contributed by a module.
#[derive(Debug, Clone)]
pub struct Migration {
    pub id: &'static str,
    pub up: &'static str,
}

/// Core trait implemented by every entity module.
#[async_trait]
pub trait Module: Sync + Send {
    /// Unique name for this module; routes are mounted under `/api/v1/{name}`.
    fn name(&self) -> &'static str;

    /// Initialize the module with the provided context.
    /// Called during application startup before schema creation.
    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Return the Axum router for this module's routes.
    /// Handlers receive the shared [`Db`] handle as state.
    fn routes(&self) -> Router<Db> {
        Router::new()
    }

    /// Return OpenAPI specification fragment for this module as JSON.
    /// Will be merged with other modules' specs.
    fn openapi(&self) -> Option<serde_json::Value> {
        None
    }

    /// Return schema migrations contributed by this module.
    /// Executed in registration order at startup.
    fn migrations(&self) -> Vec<Migration> {
        vec![]
    }
}
