//! Main verification service implementation

use chrono::{DateTime, Duration, Utc};
use pv_shared::utils::mask_email;
use std::sync::Arc;
use tracing;

use crate::domain::entities::profile::Profile;
use crate::errors::{DomainError, DomainResult, VerificationError};
use crate::repositories::ProfileRepository;

use super::config::VerificationServiceConfig;
use super::message::VerificationEmail;
use super::traits::{Clock, CodeGenerator, MailServiceTrait, SecureCodeGenerator, SystemClock};
use super::types::{SendCodeResult, VerifyCodeResult};

/// Verification service for confirming profile email addresses
pub struct VerificationService<P: ProfileRepository, M: MailServiceTrait> {
    /// Profile store holding pending codes
    profile_repository: Arc<P>,
    /// Mail service for delivering codes
    mail_service: Arc<M>,
    /// Service configuration
    config: VerificationServiceConfig,
    /// Time source for issuance and expiry checks
    clock: Arc<dyn Clock>,
    /// Source of new codes
    code_generator: Arc<dyn CodeGenerator>,
}

impl<P: ProfileRepository, M: MailServiceTrait> VerificationService<P, M> {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `profile_repository` - Profile store implementation
    /// * `mail_service` - Mail service implementation
    /// * `config` - Service configuration
    pub fn new(
        profile_repository: Arc<P>,
        mail_service: Arc<M>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            profile_repository,
            mail_service,
            config,
            clock: Arc::new(SystemClock),
            code_generator: Arc::new(SecureCodeGenerator),
        }
    }

    /// Replace the wall clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the CSPRNG code source
    pub fn with_code_generator(mut self, code_generator: Arc<dyn CodeGenerator>) -> Self {
        self.code_generator = code_generator;
        self
    }

    pub fn config(&self) -> &VerificationServiceConfig {
        &self.config
    }

    /// Issue a fresh code for the profile registered under `email`
    ///
    /// This method:
    /// 1. Looks up the profile by exact email
    /// 2. Generates a new code and computes its expiry
    /// 3. Persists code and expiry together, replacing any previous code
    /// 4. Emails the code to the profile's address
    ///
    /// The code is persisted before the email is sent. If delivery fails the
    /// stored code stays valid; the caller only learns that sending failed.
    ///
    /// # Returns
    ///
    /// * `Ok(SendCodeResult)` - Expiry and provider message id
    /// * `Err(DomainError)` - Missing email, unknown profile, storage or mail failure
    pub async fn send_verification_code(&self, email: &str) -> DomainResult<SendCodeResult> {
        if email.trim().is_empty() {
            return Err(DomainError::missing_field("email"));
        }

        let profile = self.find_profile(email).await?;

        let code = self.code_generator.generate(self.config.code_length);
        let expires_at = Duration::try_minutes(self.config.code_expiration_minutes)
            .and_then(|ttl| self.clock.now().checked_add_signed(ttl))
            .ok_or_else(|| DomainError::Internal {
                message: format!(
                    "code expiration of {} minutes is out of range",
                    self.config.code_expiration_minutes
                ),
            })?;

        self.profile_repository
            .store_verification_code(profile.id, &code, expires_at)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(email),
                    profile_id = %profile.id,
                    error = %e,
                    event = "verification_code_storage_failed",
                    "Failed to persist verification code"
                );
                e
            })?;

        tracing::info!(
            email = %mask_email(email),
            profile_id = %profile.id,
            expires_at = %expires_at,
            event = "verification_code_issued",
            "Issued new verification code"
        );

        let message = VerificationEmail::render(&code, &self.config);
        let message_id = self
            .mail_service
            .send_email(
                &profile.email,
                &message.subject,
                &message.text_body,
                &message.html_body,
            )
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(email),
                    profile_id = %profile.id,
                    error = %e,
                    event = "verification_email_failed",
                    "Failed to deliver verification email"
                );
                DomainError::MailDelivery { message: e }
            })?;

        tracing::info!(
            email = %mask_email(email),
            message_id = %message_id,
            event = "verification_email_sent",
            "Verification email sent"
        );

        Ok(SendCodeResult {
            profile_id: profile.id,
            expires_at,
            message_id,
        })
    }

    /// Check a submitted code and, on success, mark the email verified
    ///
    /// Rules are evaluated in order, first failure wins:
    /// 1. Profile exists (`NotFound`)
    /// 2. A code is pending (`NoPendingCode`)
    /// 3. The code matches exactly (`IncorrectCode`)
    /// 4. The code has not expired (`ExpiredCode`)
    ///
    /// Failures never modify the profile. On success the pending code is
    /// consumed with a conditional update, so a code verifies at most once.
    ///
    /// # Returns
    ///
    /// * `Ok(VerifyCodeResult)` - The email is now verified
    /// * `Err(DomainError)` - Missing input, rule failure or storage failure
    pub async fn verify_code(&self, email: &str, code: &str) -> DomainResult<VerifyCodeResult> {
        if email.trim().is_empty() {
            return Err(DomainError::missing_field("email"));
        }
        // Whitespace is a wrong code, not a missing one
        if code.is_empty() {
            return Err(DomainError::missing_field("code"));
        }

        let profile = self.find_profile(email).await?;
        let now = self.clock.now();

        self.check_code(&profile, code, now)?;

        let applied = self
            .profile_repository
            .consume_verification_code(profile.id, code, now)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(email),
                    profile_id = %profile.id,
                    error = %e,
                    event = "verification_consume_failed",
                    "Failed to mark email as verified"
                );
                e
            })?;

        if !applied {
            // The profile changed between the read and the conditional write;
            // classify against what is stored now.
            tracing::warn!(
                email = %mask_email(email),
                profile_id = %profile.id,
                event = "verification_consume_conflict",
                "Pending code changed during verification"
            );
            let current = self.find_profile(email).await?;
            self.check_code(&current, code, now)?;
            return Err(VerificationError::NoPendingCode.into());
        }

        tracing::info!(
            email = %mask_email(email),
            profile_id = %profile.id,
            event = "email_verified",
            "Email verified successfully"
        );

        Ok(VerifyCodeResult {
            profile_id: profile.id,
            verified_at: now,
        })
    }

    async fn find_profile(&self, email: &str) -> DomainResult<Profile> {
        let profile = self
            .profile_repository
            .find_by_email(email)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(email),
                    error = %e,
                    event = "profile_lookup_failed",
                    "Failed to look up profile"
                );
                e
            })?;

        profile.ok_or_else(|| {
            tracing::info!(
                email = %mask_email(email),
                event = "profile_not_found",
                "No profile registered for email"
            );
            DomainError::profile_not_found()
        })
    }

    fn check_code(&self, profile: &Profile, code: &str, now: DateTime<Utc>) -> DomainResult<()> {
        profile.check_code(code, now).map_err(|reason| {
            tracing::info!(
                email = %mask_email(&profile.email),
                profile_id = %profile.id,
                reason = %reason,
                event = "verification_rejected",
                "Verification code rejected"
            );
            DomainError::from(reason)
        })
    }
}
