//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, database connections, and the Axum server lifecycle.

use crate::application::services::ShortenerService;
use crate::config::{Config, mask_connection_string};
use crate::domain::repositories::LinkStore;
use crate::infrastructure::persistence::{MemoryLinkStore, PgLinkStore};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link store (PostgreSQL with migrations, or in-memory)
/// - Shortener service
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;
    let generator: Arc<dyn CodeGenerator> = Arc::new(RandomCodeGenerator::new());

    let shortener =
        ShortenerService::new(store, generator).with_max_attempts(config.code_max_attempts);
    let state = AppState::new(Arc::new(shortener), config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Picks the link store from configuration.
///
/// With a database URL, connects (with retries), applies migrations and
/// returns a [`PgLinkStore`]; otherwise returns an empty [`MemoryLinkStore`].
pub async fn build_store(config: &Config) -> Result<Arc<dyn LinkStore>> {
    let Some(ref database_url) = config.database_url else {
        tracing::warn!("No database configured, using in-memory store (links are lost on restart)");
        return Ok(Arc::new(MemoryLinkStore::new()));
    };

    let pool = connect_pool(config, database_url).await?;
    tracing::info!("Connected to database");

    run_migrations(&pool).await?;

    Ok(Arc::new(PgLinkStore::new(Arc::new(pool))))
}

/// Applies pending migrations from `./migrations`.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to apply migrations")?;

    tracing::info!("Migrations applied");
    Ok(())
}

/// Connects to PostgreSQL with exponential backoff.
///
/// Makes up to `db_connect_retries` attempts in total.
pub async fn connect_pool(config: &Config, database_url: &str) -> Result<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime));

    let strategy = ExponentialBackoff::from_millis(2)
        .factor(100)
        .max_delay(Duration::from_secs(10))
        .map(jitter)
        .take(config.db_connect_retries.saturating_sub(1));

    let options = &options;
    Retry::start(strategy, move || {
        let options = options.clone();
        async move {
            let result = options.connect(database_url).await;
            if let Err(ref e) = result {
                tracing::warn!(error = %e, "Database connection attempt failed");
            }
            result
        }
    })
    .await
    .with_context(|| {
        format!(
            "Failed to connect to {}",
            mask_connection_string(database_url)
        )
    })
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
