//! Profile entity and its email verification state.

use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::VerificationError;

/// A user profile as far as email verification is concerned
///
/// The code and its expiry are written and cleared together; a profile
/// with only one of them set is treated as having no pending code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier
    pub id: Uuid,

    /// Email address, unique across profiles and matched exactly
    pub email: String,

    /// Whether the address has been confirmed
    pub email_verified: bool,

    /// Outstanding verification code, if any
    pub email_verification_code: Option<String>,

    /// When the outstanding code stops being accepted
    pub code_expires_at: Option<DateTime<Utc>>,
}

/// Outstanding code together with its expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCode {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

impl PendingCode {
    /// Exact, constant-time comparison with a submitted code
    pub fn matches(&self, submitted: &str) -> bool {
        constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }

    /// A code is still valid at the exact instant it expires
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Lifecycle of a profile's email verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationState {
    Unverified,
    Pending,
    Verified,
}

impl Profile {
    /// Create an unverified profile with no pending code
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            email_verified: false,
            email_verification_code: None,
            code_expires_at: None,
        }
    }

    /// Builder-style helper to attach a pending code
    pub fn with_pending_code(mut self, code: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        self.set_pending_code(code, expires_at);
        self
    }

    /// Builder-style helper to mark the profile verified
    pub fn verified(mut self) -> Self {
        self.email_verified = true;
        self
    }

    /// The outstanding code, present only when both code and expiry are set
    pub fn pending_code(&self) -> Option<PendingCode> {
        match (&self.email_verification_code, self.code_expires_at) {
            (Some(code), Some(expires_at)) => Some(PendingCode {
                code: code.clone(),
                expires_at,
            }),
            _ => None,
        }
    }

    pub fn verification_state(&self) -> VerificationState {
        if self.pending_code().is_some() {
            VerificationState::Pending
        } else if self.email_verified {
            VerificationState::Verified
        } else {
            VerificationState::Unverified
        }
    }

    /// Replace any outstanding code; `email_verified` is left untouched
    pub fn set_pending_code(&mut self, code: impl Into<String>, expires_at: DateTime<Utc>) {
        self.email_verification_code = Some(code.into());
        self.code_expires_at = Some(expires_at);
    }

    /// Clear the outstanding code and mark the email verified
    pub fn complete_verification(&mut self) {
        self.email_verified = true;
        self.email_verification_code = None;
        self.code_expires_at = None;
    }

    /// Judge a submitted code against the outstanding one
    ///
    /// Checks run in a fixed order: a missing code wins over a mismatch, and
    /// a mismatch wins over expiry. An expired code is therefore only
    /// reported to someone who knows it.
    pub fn check_code(&self, submitted: &str, now: DateTime<Utc>) -> Result<(), VerificationError> {
        let pending = self
            .pending_code()
            .ok_or(VerificationError::NoPendingCode)?;

        if !pending.matches(submitted) {
            return Err(VerificationError::IncorrectCode);
        }

        if pending.is_expired_at(now) {
            return Err(VerificationError::ExpiredCode);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2024-03-01T10:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_new_profile_is_unverified() {
        let profile = Profile::new("a@b.com");
        assert_eq!(profile.verification_state(), VerificationState::Unverified);
        assert!(profile.pending_code().is_none());
        assert!(!profile.email_verified);
    }

    #[test]
    fn test_half_set_code_is_not_pending() {
        let mut profile = Profile::new("a@b.com");
        profile.email_verification_code = Some("123456".to_string());
        assert!(profile.pending_code().is_none());
        assert_eq!(
            profile.check_code("123456", now()),
            Err(VerificationError::NoPendingCode)
        );

        let mut profile = Profile::new("a@b.com");
        profile.code_expires_at = Some(now());
        assert!(profile.pending_code().is_none());
    }

    #[test]
    fn test_check_code_success() {
        let profile = Profile::new("a@b.com").with_pending_code("123456", now() + Duration::minutes(15));
        assert_eq!(profile.verification_state(), VerificationState::Pending);
        assert!(profile.check_code("123456", now()).is_ok());
    }

    #[test]
    fn test_code_valid_at_exact_expiry() {
        let profile = Profile::new("a@b.com").with_pending_code("123456", now());
        assert!(profile.check_code("123456", now()).is_ok());
        assert_eq!(
            profile.check_code("123456", now() + Duration::milliseconds(1)),
            Err(VerificationError::ExpiredCode)
        );
    }

    #[test]
    fn test_mismatch_is_reported_before_expiry() {
        let profile = Profile::new("a@b.com").with_pending_code("123456", now() - Duration::hours(1));
        assert_eq!(
            profile.check_code("654321", now()),
            Err(VerificationError::IncorrectCode)
        );
        assert_eq!(
            profile.check_code("123456", now()),
            Err(VerificationError::ExpiredCode)
        );
    }

    #[test]
    fn test_comparison_is_exact() {
        let profile = Profile::new("a@b.com").with_pending_code("012345", now() + Duration::minutes(5));
        for wrong in ["12345", "0123450", " 012345", "012345 ", ""] {
            assert_eq!(
                profile.check_code(wrong, now()),
                Err(VerificationError::IncorrectCode),
                "{:?} must not match",
                wrong
            );
        }
    }

    #[test]
    fn test_complete_verification_clears_code() {
        let mut profile = Profile::new("a@b.com").with_pending_code("123456", now());
        profile.complete_verification();
        assert!(profile.email_verified);
        assert!(profile.email_verification_code.is_none());
        assert!(profile.code_expires_at.is_none());
        assert_eq!(profile.verification_state(), VerificationState::Verified);
    }

    #[test]
    fn test_reissue_keeps_verified_flag() {
        let mut profile = Profile::new("a@b.com").verified();
        profile.set_pending_code("999999", now());
        assert!(profile.email_verified);
        assert_eq!(profile.verification_state(), VerificationState::Pending);
    }
}
