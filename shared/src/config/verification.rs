//! Verification code policy configuration

use serde::{Deserialize, Serialize};

/// Longest accepted code lifetime, one day
pub const MAX_CODE_EXPIRATION_MINUTES: i64 = 24 * 60;

/// Verification code policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Number of digits in a code
    #[serde(default = "default_code_length")]
    pub code_length: usize,

    /// Minutes a code stays valid after issuance
    #[serde(default = "default_code_expiration_minutes")]
    pub code_expiration_minutes: i64,

    /// Brand shown in the email subject and footer
    #[serde(default = "default_brand_name")]
    pub brand_name: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_length: default_code_length(),
            code_expiration_minutes: default_code_expiration_minutes(),
            brand_name: default_brand_name(),
        }
    }
}

fn default_code_length() -> usize {
    6
}

fn default_code_expiration_minutes() -> i64 {
    15
}

fn default_brand_name() -> String {
    String::from("Pasantías UNERG")
}
