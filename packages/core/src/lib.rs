//! Core types and request validation for contactbook.
//!
//! This crate holds everything about a contact that does not depend on HTTP
//! or persistence: the [`Contact`] entity, the validated [`ContactInput`] a
//! request body maps to, and the schema check that produces it.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`types`] | [`Contact`], [`ContactInput`], [`EmailChange`] |
//! | [`validation`] | Schema checking via [`validate_contact`] |
//!
//! # Quick start
//!
//! ```rust
//! use contactbook::{validate_contact, Contact, Operation};
//!
//! let body = serde_json::json!({ "name": "Mia Muster", "country": "AT" });
//! let input = validate_contact(&body, Operation::Create).expect("body should be valid");
//!
//! // Storage assigns the id.
//! let contact = Contact::new(1, input);
//! assert_eq!(contact.email, None);
//! ```

pub mod types;
pub mod validation;

pub use types::{Contact, ContactInput, EmailChange};
pub use validation::{
    validate_contact, validate_contact_json, Operation, ValidationErrors, Violation,
    COUNTRY_PATTERN, NAME_MIN_LENGTH,
};
