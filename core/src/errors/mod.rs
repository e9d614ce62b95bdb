//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::VerificationError;

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Mail delivery failed: {message}")]
    MailDelivery { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to verification rule failures
    #[error(transparent)]
    Verification(#[from] VerificationError),
}

impl DomainError {
    /// Shorthand for a missing or blank request field
    pub fn missing_field(field: &str) -> Self {
        DomainError::Validation {
            message: format!("{} is required", field),
        }
    }

    /// Shorthand for an unknown profile email
    pub fn profile_not_found() -> Self {
        DomainError::NotFound {
            resource: "profile".to_string(),
        }
    }

    /// Whether the failure was caused by the caller rather than the system
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::Validation { .. }
                | DomainError::NotFound { .. }
                | DomainError::Verification(_)
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests;
