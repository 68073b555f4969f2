use anyhow::Context;
use std::sync::Arc;

use crate::module::{InitCtx, Migration, Module};

/// Module registry holding every mounted entity module.
///
/// Registration order is preserved: it decides both the order schema
/// statements run in and the order routers are mounted.
pub struct ModuleRegistry {
    modules: Vec<Arc<dyn Module>>,
}

impl ModuleRegistry {
    /// Create a new module registry
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Register a module with the registry
    pub fn register(&mut self, module: Arc<dyn Module>) {
        self.modules.push(module);
    }

    /// Get all registered modules in registration order
    pub fn modules(&self) -> &[Arc<dyn Module>] {
        &self.modules
    }

    /// Get a module by name
    pub fn get_module(&self, name: &str) -> Option<&Arc<dyn Module>> {
        self.modules.iter().find(|module| module.name() == name)
    }

    /// Initialize all modules in registration order
    pub async fn init_modules(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!("initializing {} modules", self.modules.len());

        for module in &self.modules {
            tracing::info!(module = module.name(), "initializing module");

            module
                .init(ctx)
                .await
                .with_context(|| format!("failed to initialize module '{}'", module.name()))?;
        }

        Ok(())
    }

    /// Collect all schema migrations from all modules in registration order
    pub fn collect_migrations(&self) -> Vec<(&'static str, Migration)> {
        let mut migrations = Vec::new();

        for module in &self.modules {
            for migration in module.migrations() {
                migrations.push((module.name(), migration));
            }
        }

        migrations
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::Migration;
    use crate::settings::Settings;

    struct TestModule {
        name: &'static str,
    }

    #[async_trait::async_trait]
    impl Module for TestModule {
        fn name(&self) -> &'static str {
            self.name
        }

        fn migrations(&self) -> Vec<Migration> {
            vec![Migration {
                id: "001_init",
                up: "CREATE TABLE IF NOT EXISTS test_table (id INTEGER PRIMARY KEY);",
            }]
        }
    }

    #[test]
    fn registry_starts_empty() {
        let registry = ModuleRegistry::new();
        assert!(registry.modules().is_empty());
        assert!(registry.collect_migrations().is_empty());
    }

    #[test]
    fn migrations_keep_registration_order() {
        let mut registry = ModuleRegistry::new();
        registry.register(Arc::new(TestModule { name: "zebras" }));
        registry.register(Arc::new(TestModule { name: "ants" }));

        let migrations = registry.collect_migrations();
        assert_eq!(migrations.len(), 2);
        assert_eq!(migrations[0].0, "zebras");
        assert_eq!(migrations[1].0, "ants");
    }

    #[tokio::test]
    async fn module_lookup_and_init() {
        let mut registry = ModuleRegistry::new();
        registry.register(Arc::new(TestModule { name: "test" }));

        assert!(registry.get_module("test").is_some());
        assert!(registry.get_module("missing").is_none());

        let settings = Settings::default();
        let db = bookmart_db::Db::connect("sqlite::memory:", 1).await.unwrap();
        let ctx = InitCtx {
            settings: &settings,
            db: &db,
        };
        registry.init_modules(&ctx).await.unwrap();
    }
}
