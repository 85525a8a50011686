use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

use asset_tracker::{
    build_router,
    config::Config,
    service::AssetService,
    store::{AssetStore, MemoryAssetStore, PgAssetStore},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,asset_tracker=debug".into()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let store: Arc<dyn AssetStore> = match &config.database_url {
        Some(url) => {
            info!("Connecting to PostgreSQL...");
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(url)
                .await?;
            info!("Database connection pool established.");

            info!("Running migrations...");
            sqlx::migrate!("./migrations").run(&pool).await?;
            info!("Migrations complete.");

            Arc::new(PgAssetStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set; using in-memory store, data will not survive a restart");
            Arc::new(MemoryAssetStore::new())
        }
    };

    let state = AppState {
        service: AssetService::new(store),
    };
    if config.enable_seed {
        warn!("ENABLE_SEED is set; POST /api/seed will write random assets");
    }
    let app = build_router(state, config.enable_seed);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
