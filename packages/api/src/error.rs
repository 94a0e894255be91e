//! Standard error response body.

use serde::{Deserialize, Serialize};

/// The JSON body returned for validation and internal errors.
///
/// ```json
/// { "status": 400, "message": "The required option \"name\" is missing." }
/// ```
///
/// `status` always repeats the HTTP status code of the response.
/// Not-found responses carry no body at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// HTTP status code.
    pub status: u16,

    /// Human-readable description of the problem.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}
