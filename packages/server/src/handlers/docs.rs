//! API documentation handler for `GET /api/doc.json`.

use std::sync::LazyLock;

use axum::Json;
use serde_json::Value;

static DOCUMENT: LazyLock<Value> = LazyLock::new(contactbook_api::openapi::document);

/// `GET /api/doc.json`: the Swagger 2.0 description of the contact API.
pub async fn swagger() -> Json<Value> {
    Json(DOCUMENT.clone())
}
