//! Verification rule failures
//!
//! Messages here are for logs. User-facing text is resolved per language in
//! the presentation layer.

use thiserror::Error;

/// Reasons a submitted code is rejected, in the order they are checked
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationError {
    #[error("No pending verification code")]
    NoPendingCode,

    #[error("Incorrect verification code")]
    IncorrectCode,

    #[error("Verification code expired")]
    ExpiredCode,
}
