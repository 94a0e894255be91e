//! Storage abstraction layer for contactbook.
//!
//! The [`Storage`] trait defines the contract between the HTTP handler layer
//! and persistence. Validation lives in the handlers; storage only ever sees
//! already-validated [`ContactInput`] and [`Contact`] values.
//!
//! # Implementations
//!
//! | Type | When to use |
//! |------|-------------|
//! | [`MemoryStorage`] | Tests, conformance suite, ephemeral servers |
//! | [`SqliteStorage`] | Production; durable single-file database |
//!
//! [`MemoryStorage`]: memory::MemoryStorage
//! [`SqliteStorage`]: sqlite::SqliteStorage

pub mod memory;
pub mod sqlite;

use async_trait::async_trait;
use contactbook::{Contact, ContactInput};

// ---------------------------------------------------------------------------
// StorageError
// ---------------------------------------------------------------------------

/// Errors that storage operations can return.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The requested contact does not exist.
    #[error("not found")]
    NotFound,

    /// An unexpected error in the underlying storage backend.
    #[error("internal storage error: {0}")]
    Internal(String),
}

// ---------------------------------------------------------------------------
// Storage trait
// ---------------------------------------------------------------------------

/// The persistence contract for contacts.
///
/// Ids are assigned by the store, strictly increasing, and never reused, even
/// after the contact holding one is deleted. Each call is atomic for the one
/// record it touches; there are no multi-record transactions.
///
/// Implementations must be `Send + Sync + 'static` so they can be held in an
/// `Arc<dyn Storage>`.
#[async_trait]
pub trait Storage: Send + Sync + 'static {
    /// Persist a new contact and return it with its freshly assigned `id`.
    async fn create_contact(&self, input: &ContactInput) -> Result<Contact, StorageError>;

    /// Retrieve a contact by `id`. Returns `None` if not found.
    async fn get_contact(&self, id: i64) -> Result<Option<Contact>, StorageError>;

    /// Overwrite the stored fields of `contact.id` with `contact`'s.
    ///
    /// Returns [`StorageError::NotFound`] if the contact no longer exists.
    async fn update_contact(&self, contact: &Contact) -> Result<(), StorageError>;

    /// Remove a contact. Returns [`StorageError::NotFound`] if it does not exist.
    async fn delete_contact(&self, id: i64) -> Result<(), StorageError>;
}
