//! Brevo Mail Service Implementation
//!
//! Sends transactional email through Brevo's `POST /v3/smtp/email` API.
//! A single request per message; failures are reported, not retried.

use async_trait::async_trait;
use pv_shared::utils::mask_email;
use pv_shared::MailConfig;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

use super::mail_service::MailService;
use crate::InfrastructureError;

/// Brevo service configuration
#[derive(Clone)]
pub struct BrevoConfig {
    /// Brevo API key
    pub api_key: String,
    /// Transactional email endpoint
    pub api_url: String,
    /// Verified sender address
    pub sender_email: String,
    /// Optional sender display name
    pub sender_name: Option<String>,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl BrevoConfig {
    /// Extract Brevo settings from the generic mail configuration
    pub fn from_mail_config(config: &MailConfig) -> Result<Self, InfrastructureError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| InfrastructureError::Config("Brevo API key is not set".to_string()))?;

        if config.sender_email.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "Brevo sender email is not set".to_string(),
            ));
        }

        Ok(Self {
            api_key: api_key.to_string(),
            api_url: config.api_url.clone(),
            sender_email: config.sender_email.trim().to_string(),
            sender_name: config.sender_name.clone(),
            request_timeout_secs: config.request_timeout_secs,
        })
    }
}

impl std::fmt::Debug for BrevoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrevoConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("sender_email", &self.sender_email)
            .field("sender_name", &self.sender_name)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BrevoEmailAddress {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BrevoSendEmailBody {
    sender: BrevoEmailAddress,
    to: Vec<BrevoEmailAddress>,
    subject: String,
    html_content: String,
    text_content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BrevoSendEmailResponse {
    message_id: Option<String>,
}

/// Brevo mail service implementation
pub struct BrevoMailService {
    client: Client,
    config: BrevoConfig,
}

impl BrevoMailService {
    /// Create a new Brevo mail service
    pub fn new(config: BrevoConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            sender = %mask_email(&config.sender_email),
            "Brevo mail service initialized"
        );

        Ok(Self { client, config })
    }

    pub(crate) fn build_body(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> BrevoSendEmailBody {
        BrevoSendEmailBody {
            sender: BrevoEmailAddress {
                email: self.config.sender_email.clone(),
                name: self.config.sender_name.clone(),
            },
            to: vec![BrevoEmailAddress {
                email: to.to_string(),
                name: None,
            }],
            subject: subject.to_string(),
            html_content: html_body.to_string(),
            text_content: text_body.to_string(),
        }
    }
}

#[async_trait]
impl MailService for BrevoMailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<String, InfrastructureError> {
        let body = self.build_body(to, subject, text_body, html_body);

        let response = self
            .client
            .post(&self.config.api_url)
            .header("api-key", &self.config.api_key)
            .header(header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(to = %mask_email(to), error = %e, "Brevo request failed");
                InfrastructureError::Mail(format!("Brevo request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                to = %mask_email(to),
                status = status.as_u16(),
                "Brevo rejected the message"
            );
            return Err(InfrastructureError::Mail(format!(
                "Brevo send failed (status={}): {}",
                status.as_u16(),
                body
            )));
        }

        let message_id = response
            .json::<BrevoSendEmailResponse>()
            .await
            .ok()
            .and_then(|r| r.message_id)
            .unwrap_or_else(|| "brevo-accepted".to_string());

        info!(
            target: "mail_service",
            provider = "brevo",
            to = %mask_email(to),
            message_id = %message_id,
            "Email sent successfully"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Brevo"
    }

    async fn is_available(&self) -> bool {
        !self.config.api_key.is_empty()
    }
}
