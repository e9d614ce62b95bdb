//! Configuration for the verification service

use pv_shared::VerificationConfig;

use crate::domain::entities::verification_code::{CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES};

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Number of digits in a generated code
    pub code_length: usize,
    /// Number of minutes before a verification code expires
    pub code_expiration_minutes: i64,
    /// Product name shown in the email subject and footer
    pub brand_name: String,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_length: CODE_LENGTH,
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            brand_name: "Pasantías UNERG".to_string(),
        }
    }
}

impl From<&VerificationConfig> for VerificationServiceConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            code_length: config.code_length,
            code_expiration_minutes: config.code_expiration_minutes,
            brand_name: config.brand_name.clone(),
        }
    }
}
