//! Mock Mail Service Implementation
//!
//! Prints messages to the console instead of sending them, so the code can be
//! read off the terminal during local development.

use async_trait::async_trait;
use pv_shared::utils::{is_valid_email, mask_email};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use super::mail_service::MailService;
use crate::InfrastructureError;

/// Mock mail service for development and testing
#[derive(Clone)]
pub struct MockMailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures
    simulate_failure: Arc<AtomicBool>,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockMailService {
    /// Create a new mock mail service
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: Arc::new(AtomicBool::new(simulate_failure)),
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }
}

impl Default for MockMailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailService for MockMailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        _html_body: &str,
    ) -> Result<String, InfrastructureError> {
        if !is_valid_email(to) {
            return Err(InfrastructureError::Mail(format!(
                "Invalid recipient address: {}",
                mask_email(to)
            )));
        }

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(to = %mask_email(to), "Mock mail service simulating failure");
            return Err(InfrastructureError::Mail(
                "Simulated mail delivery failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK MAIL SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", to);
            println!("Subject: {}", subject);
            println!("Message ID: {}", message_id);
            println!("{}", text_body);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "mail_service",
            provider = "mock",
            to = %mask_email(to),
            message_id = %message_id,
            "Email sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure.load(Ordering::SeqCst)
    }
}
