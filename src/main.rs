//! Sensitive Words - A word list service with whole-word redaction
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging
//! 2. Load configuration from environment variables
//! 3. Open the configured word store
//! 4. Create the word cache and start its cleanup task
//! 5. Create Axum router with all endpoints
//! 6. Serve until SIGINT/SIGTERM, then shut down gracefully

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sensitive_words::api::{create_router, AppState};
use sensitive_words::cache::{ExpirationPolicy, WordCache};
use sensitive_words::config::{Config, StoreBackend};
use sensitive_words::spawn_cleanup_task;
use sensitive_words::store::{InMemoryWordStore, SqliteWordStore, WordStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sensitive_words=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sensitive Words service");

    let config = Config::from_env();
    info!(
        "Configuration loaded: backend={:?}, sliding_ttl={}s, absolute_ttl={}s, port={}, cleanup_interval={}s",
        config.store_backend,
        config.sliding_ttl,
        config.absolute_ttl,
        config.server_port,
        config.cleanup_interval
    );

    let store: Arc<dyn WordStore> = match config.store_backend {
        StoreBackend::Sqlite => Arc::new(
            SqliteWordStore::connect(&config.database_url)
                .await
                .with_context(|| format!("failed to open word store at {}", config.database_url))?,
        ),
        StoreBackend::Memory => {
            warn!("Using in-memory word store; words are lost on shutdown");
            Arc::new(InMemoryWordStore::new())
        }
    };

    let cache = WordCache::new(ExpirationPolicy::from_secs(
        config.sliding_ttl,
        config.absolute_ttl,
    ));
    let cleanup_handle = spawn_cleanup_task(cache.clone(), config.cleanup_interval);
    info!("Word cache initialized");

    let app = create_router(AppState::new(store, cache));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then stops the cleanup task.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    cleanup_handle.abort();
    warn!("Cleanup task aborted");
}
