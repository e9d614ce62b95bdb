//! Mail Service Module
//!
//! This module provides mail service implementations for delivering
//! verification codes. It includes a transactional HTTP provider and a mock
//! implementation for development.
//!
//! ## Features
//!
//! - **Mail Service Trait**: Common interface for all mail providers
//! - **Mock Implementation**: Console output for development
//! - **Brevo Support**: Production delivery via the Brevo transactional API
//! - **Security**: Recipient masking in logs

pub mod adapter;
pub mod brevo;
pub mod mail_service;
pub mod mock_mail;

// Re-export commonly used types
pub use adapter::MailServiceAdapter;
pub use brevo::{BrevoConfig, BrevoMailService};
pub use mail_service::MailService;
pub use mock_mail::MockMailService;

use pv_shared::{MailConfig, MailProvider};

use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create a mail service based on configuration
///
/// When the configured provider cannot be built and `allow_fallback` is set
/// (development), the mock service is returned with a warning. Otherwise the
/// construction error is returned.
pub fn create_mail_service(
    config: &MailConfig,
    allow_fallback: bool,
) -> Result<Box<dyn MailService>, InfrastructureError> {
    match config.provider {
        MailProvider::Mock => Ok(Box::new(MockMailService::new())),
        MailProvider::Brevo => match BrevoConfig::from_mail_config(config).and_then(BrevoMailService::new) {
            Ok(service) => Ok(Box::new(service)),
            Err(e) if allow_fallback => {
                tracing::error!(error = %e, "Failed to initialize Brevo mail service");
                tracing::warn!("Falling back to mock mail service");
                Ok(Box::new(MockMailService::new()))
            }
            Err(e) => Err(e),
        },
    }
}
