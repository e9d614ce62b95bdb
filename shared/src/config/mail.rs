//! Outbound mail configuration module

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported mail providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Logs messages instead of sending them
    #[default]
    Mock,
    /// Brevo transactional email HTTP API
    Brevo,
}

/// Mail provider configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Which provider delivers verification emails
    #[serde(default)]
    pub provider: MailProvider,

    /// Provider API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// Provider endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Sender address shown to recipients
    #[serde(default = "default_sender_email")]
    pub sender_email: String,

    /// Optional sender display name
    #[serde(default)]
    pub sender_name: Option<String>,

    /// Timeout for a single delivery request in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::Mock,
            api_key: None,
            api_url: default_api_url(),
            sender_email: default_sender_email(),
            sender_name: Some(String::from("Pasantías UNERG")),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("sender_email", &self.sender_email)
            .field("sender_name", &self.sender_name)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

fn default_api_url() -> String {
    String::from("https://api.brevo.com/v3/smtp/email")
}

fn default_sender_email() -> String {
    String::from("no-reply@pasantias.unerg.edu.ve")
}

fn default_request_timeout() -> u64 {
    15
}
