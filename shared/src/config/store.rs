//! Profile store configuration module

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend holding profile records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Direct Postgres connection through a pool
    Postgres,
    /// Supabase PostgREST endpoint authenticated with the service role key
    Supabase,
    /// Process-local store for development
    #[default]
    Memory,
}

/// Profile store configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct ProfileStoreConfig {
    /// Selected backend
    #[serde(default)]
    pub backend: StoreBackend,

    /// Supabase project URL
    #[serde(default)]
    pub supabase_url: Option<String>,

    /// Supabase service role key; backend only, never shipped to browsers
    #[serde(default)]
    pub service_role_key: Option<String>,

    /// Table (or PostgREST resource) holding profiles
    #[serde(default = "default_table")]
    pub table: String,

    /// Timeout for a single REST request in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Emails pre-registered in the `memory` backend
    #[serde(default)]
    pub seed_emails: Vec<String>,
}

impl Default for ProfileStoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            supabase_url: None,
            service_role_key: None,
            table: default_table(),
            request_timeout_secs: default_request_timeout(),
            seed_emails: Vec::new(),
        }
    }
}

impl ProfileStoreConfig {
    /// Whether both Supabase settings are present and non-empty
    pub fn has_supabase_credentials(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.supabase_url) && present(&self.service_role_key)
    }
}

impl fmt::Debug for ProfileStoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileStoreConfig")
            .field("backend", &self.backend)
            .field("supabase_url", &self.supabase_url)
            .field(
                "service_role_key",
                &self.service_role_key.as_ref().map(|_| "<redacted>"),
            )
            .field("table", &self.table)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("seed_emails", &self.seed_emails.len())
            .finish()
    }
}

fn default_table() -> String {
    String::from("profiles")
}

fn default_request_timeout() -> u64 {
    10
}
