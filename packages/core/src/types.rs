//! Core data types for contactbook.
//!
//! [`Contact`] is the persisted entity and always carries a store-assigned
//! `id`. [`ContactInput`] is what a validated request body maps to; it has no
//! `id` because it has not been persisted yet. Keeping the two apart is how
//! the "id present iff persisted" invariant is enforced.

use serde::{Deserialize, Serialize};

/// A stored contact record.
///
/// Serialises to the flat wire shape used by every contact endpoint:
///
/// ```json
/// { "id": 1, "name": "Mia Muster", "email": null, "country": "AT" }
/// ```
///
/// `email` is always emitted; an unset email is `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Store-assigned identifier. Immutable after creation.
    pub id: i64,

    /// Display name. Never empty.
    pub name: String,

    /// Optional email address, syntactically valid when present.
    pub email: Option<String>,

    /// ISO 3166-1 alpha-2 country code in capital letters.
    pub country: String,
}

/// What an update does with the stored `email`.
///
/// The three cases correspond to the three shapes the `email` key can take
/// in a request body: absent, `null`, or a string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EmailChange {
    /// The key was absent; leave the stored value alone.
    #[default]
    Keep,
    /// The key was explicitly `null`; remove the stored value.
    Clear,
    /// The key carried a valid address; store it.
    Set(String),
}

/// A validated create/update request body.
///
/// Produced only by [`crate::validate_contact`], so every instance satisfies
/// the schema: `name` is non-empty, `country` matches `^[A-Z]{2}$` and a
/// [`EmailChange::Set`] address is well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub country: String,
    pub email: EmailChange,
}

impl Contact {
    /// Build a freshly persisted contact from validated input.
    ///
    /// Called by storage once it has assigned `id`. On creation both
    /// [`EmailChange::Keep`] and [`EmailChange::Clear`] mean "no email".
    pub fn new(id: i64, input: ContactInput) -> Self {
        let email = match input.email {
            EmailChange::Set(email) => Some(email),
            EmailChange::Keep | EmailChange::Clear => None,
        };
        Self {
            id,
            name: input.name,
            email,
            country: input.country,
        }
    }

    /// Apply validated update input field by field.
    ///
    /// `name` and `country` are replaced unconditionally; `email` follows
    /// the [`EmailChange`] variant. `id` is never touched.
    pub fn apply(&mut self, input: ContactInput) {
        self.name = input.name;
        self.country = input.country;
        match input.email {
            EmailChange::Keep => {}
            EmailChange::Clear => self.email = None,
            EmailChange::Set(email) => self.email = Some(email),
        }
    }
}
