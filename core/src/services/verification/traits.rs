//! Traits for mail, clock and code source integration

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::verification_code::generate_numeric_code;

/// Trait for mail service integration
#[async_trait]
pub trait MailServiceTrait: Send + Sync {
    /// Send an email with plain-text and HTML bodies, returning the provider message id
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<String, String>;
}

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of verification codes
pub trait CodeGenerator: Send + Sync {
    fn generate(&self, length: usize) -> String;
}

/// Codes drawn from the operating system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureCodeGenerator;

impl CodeGenerator for SecureCodeGenerator {
    fn generate(&self, length: usize) -> String {
        generate_numeric_code(length)
    }
}
