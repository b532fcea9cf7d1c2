use anyhow::Context;
use library_api::modules;
use library_kernel::{InitCtx, ModuleRegistry};
use library_kernel::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load settings")?;

    library_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        db = %settings.database.connection_string,
        "library-api bootstrap starting"
    );

    let pool = library_db::connect(
        &settings.database.connection_string,
        settings.database.max_connections,
    )
    .await?;

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);

    let ctx = InitCtx {
        settings: &settings,
        db: &pool,
    };

    registry.init_all(&ctx).await?;
    library_db::apply_migrations(&pool, &registry.collect_migrations()).await?;
    registry.start_all(&ctx).await?;

    library_http::start_server(&registry, &ctx).await?;

    registry.stop_all().await?;

    tracing::info!("library-api shut down");
    Ok(())
}
