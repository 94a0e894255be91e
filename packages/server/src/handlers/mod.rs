//! HTTP request handlers for the contactbook endpoints.
//!
//! Handlers are async functions that receive Axum extractors and return
//! `Result<impl IntoResponse, AppError>`. Request-body validation happens
//! here, before any call into storage.

pub mod contacts;
pub mod docs;

use std::sync::Arc;

use crate::storage::Storage;

/// Shared application state threaded through all Axum handlers via [`axum::extract::State`].
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}
