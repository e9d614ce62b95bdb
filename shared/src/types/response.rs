//! Success response bodies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Success acknowledgement: `{ "ok": true }` or `{ "ok": true, "message": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckResponse {
    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AckResponse {
    /// Bare acknowledgement
    pub fn ok() -> Self {
        Self {
            ok: true,
            message: None,
        }
    }

    /// Acknowledgement carrying a user-facing message
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: Some(message.into()),
        }
    }
}

/// Health check body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            ok: true,
            service: service.into(),
            version: version.into(),
            timestamp: Utc::now(),
        }
    }
}
