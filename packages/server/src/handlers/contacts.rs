//! Contact handlers: get, create, update, delete.
//!
//! # Ordering
//!
//! For routes with an `{id}`, the existence check runs first: a request for a
//! missing contact is answered with 404 no matter what its body contains.
//! Body validation always runs before storage is mutated, so a rejected
//! request never leaves a partial write behind.
//!
//! # Path ids
//!
//! `{id}` must be one or more ASCII digits that fit in an `i64`. Anything
//! else is treated as an unknown route and answered with 404, the same as an
//! id that does not exist.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use contactbook::{validate_contact_json, Contact, Operation};

use crate::error::AppError;

use super::AppState;

/// `GET /api/contacts/{id}`: return a single contact.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Contact>, AppError> {
    let contact = find(&state, &id).await?;
    Ok(Json(contact))
}

/// `POST /api/contacts`: create a contact.
///
/// Returns 200 with the stored contact, including its new `id`.
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Contact>, AppError> {
    let input = validate_contact_json(&body, Operation::Create)?;
    let contact = state.storage.create_contact(&input).await?;
    tracing::info!(id = contact.id, "contact created");
    Ok(Json(contact))
}

/// `PUT /api/contacts/{id}`: replace a contact's fields.
///
/// `name` and `country` are always replaced. `email` is replaced when the
/// key is present, cleared when it is `null`, and kept when it is absent.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Contact>, AppError> {
    let mut contact = find(&state, &id).await?;
    let input = validate_contact_json(&body, Operation::Update)?;

    contact.apply(input);
    state.storage.update_contact(&contact).await?;
    tracing::info!(id = contact.id, "contact updated");
    Ok(Json(contact))
}

/// `DELETE /api/contacts/{id}`: remove a contact. Returns 204 with no body.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let contact = find(&state, &id).await?;
    state.storage.delete_contact(contact.id).await?;
    tracing::info!(id = contact.id, "contact deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Resolve a raw `{id}` segment to a stored contact, or [`AppError::NotFound`].
async fn find(state: &AppState, raw_id: &str) -> Result<Contact, AppError> {
    let id = parse_id(raw_id).ok_or(AppError::NotFound)?;
    state
        .storage
        .get_contact(id)
        .await?
        .ok_or(AppError::NotFound)
}

/// Accepts exactly `\d+` within `i64` range.
fn parse_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
