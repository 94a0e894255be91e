//! In-memory storage implementation.
//!
//! All data is held in RAM behind a [`RwLock`] and is lost when the process
//! exits. Use this for tests, the conformance suite, and ephemeral servers.
//!
//! Contacts live in a [`BTreeMap`] keyed by id. Ids come from a monotonically
//! increasing counter that is never rewound, so a deleted contact's id is
//! never handed out again.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use contactbook::{Contact, ContactInput};

use super::{Storage, StorageError};

// ---------------------------------------------------------------------------
// Internal state
// ---------------------------------------------------------------------------

struct Inner {
    contacts: BTreeMap<i64, Contact>,
    /// Id handed to the next created contact.
    next_id: i64,
}

impl Inner {
    fn new() -> Self {
        Self {
            contacts: BTreeMap::new(),
            next_id: 1,
        }
    }
}

// ---------------------------------------------------------------------------
// MemoryStorage
// ---------------------------------------------------------------------------

/// Thread-safe, in-memory implementation of [`Storage`].
pub struct MemoryStorage {
    inner: RwLock<Inner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::new()),
        }
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.read().contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|p| p.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|p| p.into_inner())
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Storage impl
// ---------------------------------------------------------------------------

#[async_trait]
impl Storage for MemoryStorage {
    async fn create_contact(&self, input: &ContactInput) -> Result<Contact, StorageError> {
        let mut inner = self.write();
        let id = inner.next_id;
        inner.next_id += 1;
        let contact = Contact::new(id, input.clone());
        inner.contacts.insert(id, contact.clone());
        Ok(contact)
    }

    async fn get_contact(&self, id: i64) -> Result<Option<Contact>, StorageError> {
        Ok(self.read().contacts.get(&id).cloned())
    }

    async fn update_contact(&self, contact: &Contact) -> Result<(), StorageError> {
        let mut inner = self.write();
        let stored = inner
            .contacts
            .get_mut(&contact.id)
            .ok_or(StorageError::NotFound)?;
        *stored = contact.clone();
        Ok(())
    }

    async fn delete_contact(&self, id: i64) -> Result<(), StorageError> {
        self.write()
            .contacts
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
