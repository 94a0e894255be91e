//! Shared helpers for the contactbook conformance test suite.
//!
//! Provides [`spawn_server`], which binds a `TcpListener` on an
//! ephemeral port, wires up an in-process server backed by `MemoryStorage`,
//! and returns both the local URL and a reference to the underlying storage
//! so tests can inspect it without going through the HTTP layer.

use std::sync::Arc;

use contactbook_server::{build_router, MemoryStorage, Storage};

/// Start an ephemeral in-process server and return `(base_url, storage)`.
///
/// The server runs in a background `tokio` task and is bound to an
/// OS-assigned port on `127.0.0.1`. The returned `String` is the base URL,
/// e.g. `http://127.0.0.1:51234`.
///
/// # Panics
///
/// Panics if the TCP listener cannot be bound.
pub async fn spawn_server() -> (String, Arc<MemoryStorage>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");
    let base_url = format!("http://{addr}");

    let mem_storage = Arc::new(MemoryStorage::new());
    let storage: Arc<dyn Storage> = Arc::clone(&mem_storage) as Arc<dyn Storage>;
    let router = build_router(storage);

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("conformance server error");
    });

    (base_url, mem_storage)
}
