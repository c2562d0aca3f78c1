use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gameshelf_api::{
    db::{self, DocumentStore, PostgresStore},
    services::CatalogClient,
    AppState, Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gameshelf_api=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let pool = db::create_pool(&config.database_url).await?;
    sqlx::migrate!().run(&pool).await?;

    let store: Arc<dyn DocumentStore> = Arc::new(PostgresStore::new(pool));
    let catalog = CatalogClient::new(
        config.catalog_api_key.clone(),
        config.catalog_api_url.clone(),
        (config.upcoming_window_start, config.upcoming_window_end),
    );

    let app = gameshelf_api::create_router(AppState::new(catalog, store));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
