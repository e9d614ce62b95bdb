//! Types for verification service results

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Result of sending a verification code
///
/// The code itself is deliberately absent; it only travels by email.
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// Profile the code was issued for
    pub profile_id: Uuid,
    /// When the code stops being accepted
    pub expires_at: DateTime<Utc>,
    /// Message identifier returned by the mail provider
    pub message_id: String,
}

/// Result of a successful verification
#[derive(Debug, Clone)]
pub struct VerifyCodeResult {
    /// Profile whose email is now verified
    pub profile_id: Uuid,
    /// Instant the code was accepted
    pub verified_at: DateTime<Utc>,
}
