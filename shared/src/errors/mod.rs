//! Shared error response structure

use serde::{Deserialize, Serialize};

/// Error body returned by every endpoint
///
/// `error` carries the localized, human-readable message the browser client
/// displays as-is; `code` is the stable machine identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message (localized)
    pub error: String,

    /// Error code for programmatic handling
    pub code: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: code.into(),
        }
    }
}

/// Error codes used across the application
pub mod error_codes {
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const METHOD_NOT_ALLOWED: &str = "METHOD_NOT_ALLOWED";
    pub const PROFILE_NOT_FOUND: &str = "PROFILE_NOT_FOUND";
    pub const NO_PENDING_CODE: &str = "NO_PENDING_CODE";
    pub const INCORRECT_CODE: &str = "INCORRECT_CODE";
    pub const EXPIRED_CODE: &str = "EXPIRED_CODE";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let body = ErrorResponse::new(error_codes::NO_PENDING_CODE, "No hay código pendiente");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "No hay código pendiente");
        assert_eq!(json["code"], "NO_PENDING_CODE");
    }
}
