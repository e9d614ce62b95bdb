//! Mail service trait shared by all providers

use async_trait::async_trait;

use crate::InfrastructureError;

/// Outbound mail provider
#[async_trait]
pub trait MailService: Send + Sync {
    /// Send one message with plain-text and HTML bodies
    ///
    /// # Returns
    /// The provider's message identifier
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<String, InfrastructureError>;

    /// Human-readable provider name for logs
    fn provider_name(&self) -> &str;

    /// Whether the provider is configured and expected to accept messages
    async fn is_available(&self) -> bool;
}
