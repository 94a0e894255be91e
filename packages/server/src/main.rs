//! `contactbook-server`: HTTP API for contact records.
//!
//! # Quick start
//!
//! ```sh
//! # In-memory server on the default port:
//! contactbook-server
//!
//! # Persistent SQLite server:
//! CONTACTBOOK_DB=./contacts.db contactbook-server
//!
//! # Custom bind address:
//! CONTACTBOOK_BIND=127.0.0.1:8080 contactbook-server
//! ```
//!
//! # Environment variables
//!
//! See [`ServerConfig`] for the full list. Log output is controlled by
//! `RUST_LOG`.

use std::sync::Arc;

use contactbook_server::{build_router, MemoryStorage, ServerConfig, SqliteStorage, Storage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "contactbook_server=info,tower_http=debug".into()
            }),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let storage: Arc<dyn Storage> = match &config.db_path {
        Some(path) => {
            tracing::info!("storage: SQLite at {path}");
            let storage = SqliteStorage::open(path)
                .map_err(|e| format!("failed to open SQLite database at {path}: {e}"))?;
            Arc::new(storage)
        }
        None => {
            tracing::info!("storage: in-memory (data will not survive restart)");
            Arc::new(MemoryStorage::new())
        }
    };

    let app = build_router(storage);

    tracing::info!("listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| format!("failed to bind {}: {e}", config.bind_addr))?;

    axum::serve(listener, app).await?;
    Ok(())
}
