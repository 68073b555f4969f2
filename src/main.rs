use anyhow::Context;

use bookmart_app::modules;
use bookmart_db::Db;
use bookmart_kernel::{settings::Settings, InitCtx, ModuleRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load settings")?;
    bookmart_telemetry::init(&settings.telemetry);

    tracing::info!(
        env = ?settings.environment,
        db = %settings.database.url(),
        "bookmart bootstrap starting"
    );

    std::fs::create_dir_all(&settings.database.data_dir).with_context(|| {
        format!(
            "failed to create data directory '{}'",
            settings.database.data_dir
        )
    })?;

    let db = Db::connect(&settings.database.url(), settings.database.max_connections).await?;

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);

    let ctx = InitCtx {
        settings: &settings,
        db: &db,
    };
    registry.init_modules(&ctx).await?;

    let migrations = registry.collect_migrations();
    for (module, migration) in &migrations {
        tracing::info!(module = *module, id = migration.id, "applying schema migration");
    }
    db.create_schema(migrations.iter().map(|(_, m)| m.up))
        .await?;

    tracing::info!("bookmart bootstrap complete");

    bookmart_http::start_server(&registry, &settings, db).await
}
