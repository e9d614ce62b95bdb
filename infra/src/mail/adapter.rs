//! Mail Service Trait Adapter
//!
//! Implements the core `MailServiceTrait` for any infrastructure mail
//! provider, so the verification service never sees provider error types.

use async_trait::async_trait;
use pv_core::services::verification::MailServiceTrait;

use super::mail_service::MailService;

/// Adapter that implements the core MailServiceTrait for a boxed provider
pub struct MailServiceAdapter {
    inner: Box<dyn MailService>,
}

impl MailServiceAdapter {
    pub fn new(inner: Box<dyn MailService>) -> Self {
        Self { inner }
    }

    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }

    pub async fn is_available(&self) -> bool {
        self.inner.is_available().await
    }
}

#[async_trait]
impl MailServiceTrait for MailServiceAdapter {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<String, String> {
        self.inner
            .send_email(to, subject, text_body, html_body)
            .await
            .map_err(|e| e.to_string())
    }
}
