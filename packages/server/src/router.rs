//! Assembles the Axum [`Router`] from all handler modules.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{contacts, docs, AppState},
    storage::Storage,
};

/// Build the complete application router with shared state.
pub fn build_router(storage: Arc<dyn Storage>) -> Router {
    let state = AppState { storage };

    Router::new()
        // Contacts
        .route("/api/contacts", post(contacts::create))
        .route(
            "/api/contacts/{id}",
            get(contacts::get)
                .put(contacts::update)
                .delete(contacts::delete),
        )
        // Documentation
        .route("/api/doc.json", get(docs::swagger))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
