//! Test doubles for the verification service seams
//!
//! Used by this crate's tests and by the HTTP layer's integration tests.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use super::traits::{Clock, CodeGenerator, MailServiceTrait};

/// An email captured by [`MockMailService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// Mail service that records messages instead of sending them
#[derive(Clone, Default)]
pub struct MockMailService {
    sent: Arc<Mutex<Vec<SentEmail>>>,
    should_fail: Arc<AtomicBool>,
    counter: Arc<AtomicU64>,
}

impl MockMailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mail service whose every send fails
    pub fn failing() -> Self {
        let service = Self::default();
        service.set_should_fail(true);
        service
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    /// All recorded messages, oldest first
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().map(|s| s.len()).unwrap_or(0)
    }

    /// Most recent message sent to `to`
    pub fn last_sent_to(&self, to: &str) -> Option<SentEmail> {
        self.sent
            .lock()
            .ok()
            .and_then(|s| s.iter().rev().find(|m| m.to == to).cloned())
    }
}

#[async_trait]
impl MailServiceTrait for MockMailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<String, String> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err("Mail service error".to_string());
        }

        let message = SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            text_body: text_body.to_string(),
            html_body: html_body.to_string(),
        };
        self.sent
            .lock()
            .map_err(|_| "Mail log poisoned".to_string())?
            .push(message);

        let id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("mock-mail-{}", id))
    }
}

/// Clock that only moves when told to
#[derive(Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        if let Ok(mut now) = self.now.lock() {
            *now = instant;
        }
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(mut now) = self.now.lock() {
            *now += by;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.lock().map(|n| *n).unwrap_or_else(|p| *p.into_inner())
    }
}

/// Code source returning queued codes, then falling back to a fixed one
#[derive(Clone)]
pub struct FixedCodeGenerator {
    queued: Arc<Mutex<VecDeque<String>>>,
    fallback: String,
}

impl FixedCodeGenerator {
    /// Always produce `code`
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            queued: Arc::new(Mutex::new(VecDeque::new())),
            fallback: code.into(),
        }
    }

    /// Produce `codes` in order, repeating the last one afterwards
    pub fn sequence<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let queued: VecDeque<String> = codes.into_iter().map(Into::into).collect();
        let fallback = queued.back().cloned().unwrap_or_default();
        Self {
            queued: Arc::new(Mutex::new(queued)),
            fallback,
        }
    }
}

impl CodeGenerator for FixedCodeGenerator {
    fn generate(&self, _length: usize) -> String {
        self.queued
            .lock()
            .ok()
            .and_then(|mut q| q.pop_front())
            .unwrap_or_else(|| self.fallback.clone())
    }
}
