//! Email verification route handlers
//!
//! - `POST /api/send-verification` issues a code and mails it
//! - `POST /api/verify-code` checks a submitted code and marks the email verified

pub mod send_verification;
pub mod verify_code;

use std::sync::Arc;

use pv_core::repositories::ProfileRepository;
use pv_core::services::{MailServiceTrait, VerificationService};

/// Application state that holds shared services
pub struct AppState<P, M>
where
    P: ProfileRepository,
    M: MailServiceTrait,
{
    pub verification_service: Arc<VerificationService<P, M>>,
}

impl<P, M> AppState<P, M>
where
    P: ProfileRepository,
    M: MailServiceTrait,
{
    pub fn new(verification_service: Arc<VerificationService<P, M>>) -> Self {
        Self {
            verification_service,
        }
    }
}
