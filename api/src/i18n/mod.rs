//! Localized user-facing messages
//!
//! Messages live in `i18n/messages.toml`, embedded at compile time. Each error
//! entry carries its machine code and HTTP status alongside the Spanish and
//! English text.

use once_cell::sync::Lazy;
use pv_shared::{error_codes, Language};
use serde::Deserialize;
use std::collections::HashMap;

const EMBEDDED_MESSAGES: &str = include_str!("../../i18n/messages.toml");

/// Spanish and English renditions of one message
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedText {
    pub es: String,
    pub en: String,
}

impl LocalizedText {
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Spanish => &self.es,
            Language::English => &self.en,
        }
    }
}

/// Error message entry
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorMessage {
    pub code: String,
    pub http_status: u16,
    #[serde(flatten)]
    pub text: LocalizedText,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Messages {
    #[serde(default)]
    pub errors: HashMap<String, ErrorMessage>,
    #[serde(default)]
    pub messages: HashMap<String, LocalizedText>,
}

/// Error text resolved for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedError {
    pub code: String,
    pub message: String,
    pub http_status: u16,
}

pub static MESSAGES: Lazy<Messages> = Lazy::new(|| {
    parse_messages(EMBEDDED_MESSAGES).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to parse embedded messages");
        Messages::default()
    })
});

pub fn parse_messages(content: &str) -> Result<Messages, toml::de::Error> {
    toml::from_str(content)
}

/// Look up an error message
///
/// Unknown keys resolve to the generic internal error so a missing entry
/// never leaks the key itself to clients.
pub fn error_message(key: &str, lang: Language) -> LocalizedError {
    match MESSAGES.errors.get(key) {
        Some(entry) => LocalizedError {
            code: entry.code.clone(),
            message: entry.text.get(lang).to_string(),
            http_status: entry.http_status,
        },
        None => {
            tracing::warn!(key, "Missing error message entry");
            LocalizedError {
                code: error_codes::INTERNAL_ERROR.to_string(),
                message: match lang {
                    Language::Spanish => "Error interno".to_string(),
                    Language::English => "Internal error".to_string(),
                },
                http_status: 500,
            }
        }
    }
}

/// Look up a non-error message, falling back to the key
pub fn message(key: &str, lang: Language) -> String {
    MESSAGES
        .messages
        .get(key)
        .map(|m| m.get(lang).to_string())
        .unwrap_or_else(|| key.to_string())
}
