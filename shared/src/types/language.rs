//! Language and internationalization types

use serde::{Deserialize, Serialize};

/// Language used for user-facing messages
///
/// The portal is Spanish-first; English is served when the client prefers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Pick the preferred supported language from an Accept-Language header
    ///
    /// Honors quality values (`es;q=0.4, en;q=0.9` selects English). Unknown
    /// languages are ignored; with no supported entry Spanish is used.
    pub fn from_accept_language(header: &str) -> Self {
        let mut preferred = Language::default();
        let mut best_quality = 0.0_f32;

        for entry in header.split(',') {
            let mut parts = entry.trim().split(';');
            let tag = parts.next().unwrap_or("").trim().to_lowercase();
            let quality = parts
                .find_map(|p| p.trim().strip_prefix("q=").map(|q| q.parse::<f32>().unwrap_or(0.0)))
                .unwrap_or(1.0);

            let candidate = if tag.starts_with("es") {
                Language::Spanish
            } else if tag.starts_with("en") {
                Language::English
            } else {
                continue;
            };

            if quality > best_quality {
                preferred = candidate;
                best_quality = quality;
            }
        }

        preferred
    }

    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
