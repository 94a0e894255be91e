//! SQLite-backed storage implementation.
//!
//! Uses `rusqlite` (with bundled SQLite) wrapped in an `Arc<Mutex<Connection>>`
//! to satisfy the `Send + Sync` requirements. All blocking calls are offloaded
//! to a thread-pool via `tokio::task::spawn_blocking`.
//!
//! # Schema
//!
//! - `contacts`: one row per contact. `AUTOINCREMENT` guarantees that the
//!   rowid of a deleted contact is never assigned again.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use contactbook::{Contact, ContactInput};
use rusqlite::{params, Connection};

use super::{Storage, StorageError};

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS contacts (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    name     TEXT NOT NULL,
    email    TEXT,
    country  TEXT NOT NULL
);
";

// ---------------------------------------------------------------------------
// SqliteStorage
// ---------------------------------------------------------------------------

/// SQLite-backed implementation of [`Storage`].
///
/// Holds a single database connection protected by a `Mutex`. All operations
/// run inside `spawn_blocking` to avoid blocking the async runtime.
pub struct SqliteStorage {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    /// Open (or create) the SQLite database at `path` and apply the schema.
    pub fn open(path: &str) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database (data is lost when dropped).
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

// ---------------------------------------------------------------------------
// Error conversions
// ---------------------------------------------------------------------------

fn map_err(e: rusqlite::Error) -> StorageError {
    StorageError::Internal(e.to_string())
}

fn map_join_err(e: tokio::task::JoinError) -> StorageError {
    StorageError::Internal(format!("task join error: {e}"))
}

fn lock(conn: &Mutex<Connection>) -> MutexGuard<'_, Connection> {
    conn.lock().unwrap_or_else(|p| p.into_inner())
}

// ---------------------------------------------------------------------------
// Storage impl
// ---------------------------------------------------------------------------

#[async_trait]
impl Storage for SqliteStorage {
    async fn create_contact(&self, input: &ContactInput) -> Result<Contact, StorageError> {
        let conn = Arc::clone(&self.conn);
        let input = input.clone();

        tokio::task::spawn_blocking(move || {
            let conn = lock(&conn);
            // Build with a placeholder id so the email rule lives in one place.
            let mut contact = Contact::new(0, input);
            conn.execute(
                "INSERT INTO contacts (name, email, country) VALUES (?1, ?2, ?3)",
                params![contact.name, contact.email, contact.country],
            )
            .map_err(map_err)?;
            contact.id = conn.last_insert_rowid();
            Ok(contact)
        })
        .await
        .map_err(map_join_err)?
    }

    async fn get_contact(&self, id: i64) -> Result<Option<Contact>, StorageError> {
        let conn = Arc::clone(&self.conn);

        tokio::task::spawn_blocking(move || {
            let conn = lock(&conn);
            let result = conn.query_row(
                "SELECT id, name, email, country FROM contacts WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Contact {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        email: row.get(2)?,
                        country: row.get(3)?,
                    })
                },
            );
            match result {
                Ok(contact) => Ok(Some(contact)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(map_err(e)),
            }
        })
        .await
        .map_err(map_join_err)?
    }

    async fn update_contact(&self, contact: &Contact) -> Result<(), StorageError> {
        let conn = Arc::clone(&self.conn);
        let contact = contact.clone();

        tokio::task::spawn_blocking(move || {
            let conn = lock(&conn);
            let changed = conn
                .execute(
                    "UPDATE contacts SET name = ?1, email = ?2, country = ?3 WHERE id = ?4",
                    params![contact.name, contact.email, contact.country, contact.id],
                )
                .map_err(map_err)?;
            if changed == 0 {
                return Err(StorageError::NotFound);
            }
            Ok(())
        })
        .await
        .map_err(map_join_err)?
    }

    async fn delete_contact(&self, id: i64) -> Result<(), StorageError> {
        let conn = Arc::clone(&self.conn);

        tokio::task::spawn_blocking(move || {
            let conn = lock(&conn);
            let changed = conn
                .execute("DELETE FROM contacts WHERE id = ?1", params![id])
                .map_err(map_err)?;
            if changed == 0 {
                return Err(StorageError::NotFound);
            }
            Ok(())
        })
        .await
        .map_err(map_join_err)?
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
