// src/main.rs

use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use trivia_api::{
    config::Config,
    cors_layer, create_router,
    state::AppState,
    store::{SqlStore, StoreError},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from environment (.env included)
    let config = Config::from_env()?;

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "trivia.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let store = connect_with_retry(&config).await?;
    tracing::info!("Database connected ({:?})", store.dialect());

    store.ensure_schema().await?;
    tracing::info!("Schema ready.");

    if config.seed_categories {
        let seeded = store.seed_categories().await?;
        if seeded > 0 {
            tracing::info!("Seeded {} default categories", seeded);
        }
    }

    let app = create_router(
        AppState::new(store.clone()),
        cors_layer(config.cors_origins.as_deref()),
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("Server stopped.");
    Ok(())
}

/// Connects to the database, retrying while it starts up.
async fn connect_with_retry(config: &Config) -> Result<SqlStore, StoreError> {
    let mut retry_count = 0;
    loop {
        match SqlStore::connect(&config.database_url, config.db_max_connections).await {
            Ok(store) => return Ok(store),
            Err(StoreError::Database(e)) if retry_count < 5 => {
                retry_count += 1;
                tracing::warn!(
                    "Database not ready ({}), retrying in 2s... (Attempt {})",
                    e,
                    retry_count
                );
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
            Err(e) => {
                tracing::error!("Failed to connect to database: {}", e);
                return Err(e);
            }
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
