//! Swagger 2.0 description of the contact endpoints, served at `GET /api/doc.json`.
//!
//! Built once from the same constants the validator uses, so the published
//! schema and the enforced schema cannot drift apart.

use contactbook::{COUNTRY_PATTERN, NAME_MIN_LENGTH};
use serde_json::{json, Value};

/// Base path shared by every contact route.
pub const CONTACTS_PATH: &str = "/api/contacts";

/// Build the complete Swagger 2.0 document.
pub fn document() -> Value {
    json!({
        "swagger": "2.0",
        "info": {
            "title": "contactbook",
            "description": "Create, read, update and delete contacts.",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "consumes": ["application/json"],
        "produces": ["application/json"],
        "paths": {
            CONTACTS_PATH: {
                "post": {
                    "summary": "Adds a new contact.",
                    "parameters": [body_parameter()],
                    "responses": {
                        "200": contact_response("Returns status 200 and the new contact."),
                        "400": error_response(),
                    },
                },
            },
            format!("{CONTACTS_PATH}/{{id}}"): {
                "get": {
                    "summary": "Returns a specific contact.",
                    "parameters": [id_parameter()],
                    "responses": {
                        "200": contact_response("Returns status 200 and the contact."),
                        "404": not_found_response(),
                    },
                },
                "put": {
                    "summary": "Updates an existing contact.",
                    "parameters": [id_parameter(), body_parameter()],
                    "responses": {
                        "200": contact_response("Returns status 200 and the modified contact."),
                        "400": error_response(),
                        "404": not_found_response(),
                    },
                },
                "delete": {
                    "summary": "Deletes the given contact.",
                    "parameters": [id_parameter()],
                    "responses": {
                        "204": { "description": "The contact was deleted." },
                        "404": not_found_response(),
                    },
                },
            },
        },
        "definitions": {
            "Contact": {
                "type": "object",
                "properties": {
                    "id": { "type": "integer" },
                    "name": { "type": "string" },
                    "email": { "type": "string" },
                    "country": { "type": "string" },
                },
            },
            "ContactInput": {
                "type": "object",
                "required": ["name", "country"],
                "properties": {
                    "name": {
                        "type": "string",
                        "minLength": NAME_MIN_LENGTH,
                        "example": "Mia Muster",
                    },
                    "email": {
                        "type": "string",
                        "format": "email",
                        "example": "mia@muster.com",
                    },
                    "country": {
                        "description": "ISO-2 country code in capital letters.",
                        "type": "string",
                        "pattern": COUNTRY_PATTERN,
                        "example": "AT",
                    },
                },
            },
            "Error": {
                "type": "object",
                "properties": {
                    "status": { "type": "integer" },
                    "message": { "type": "string" },
                },
            },
        },
    })
}

fn id_parameter() -> Value {
    json!({ "name": "id", "in": "path", "required": true, "type": "integer" })
}

fn body_parameter() -> Value {
    json!({
        "name": "body",
        "in": "body",
        "description": "Contact data.",
        "required": true,
        "schema": { "$ref": "#/definitions/ContactInput" },
    })
}

fn contact_response(description: &str) -> Value {
    json!({ "description": description, "schema": { "$ref": "#/definitions/Contact" } })
}

fn error_response() -> Value {
    json!({
        "description": "Returns status 400 if the body violates the schema.",
        "schema": { "$ref": "#/definitions/Error" },
    })
}

fn not_found_response() -> Value {
    json!({ "description": "Returns status 404 if there is no contact with the given id." })
}
