//! Request and response types for the contactbook HTTP API.
//!
//! # Endpoints covered
//!
//! | Method | Path | Type |
//! |--------|------|------|
//! | GET | `/api/contacts/{id}` | → [`contactbook::Contact`] |
//! | POST | `/api/contacts` | body → [`contactbook::Contact`] |
//! | PUT | `/api/contacts/{id}` | body → [`contactbook::Contact`] |
//! | DELETE | `/api/contacts/{id}` | → `204` |
//! | GET | `/api/doc.json` | → [`openapi::document`] |
//!
//! Request bodies are validated with [`contactbook::validate_contact`];
//! failures are reported as an [`ErrorResponse`].

pub mod error;
pub mod openapi;

pub use error::ErrorResponse;
pub use openapi::CONTACTS_PATH;
