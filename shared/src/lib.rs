//! Shared utilities and common types for the Pasantías verification server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and layered loading
//! - Error response structures
//! - Utility functions (email validation and masking)
//! - Common type definitions (language, acknowledgement bodies)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, DatabaseConfig, Environment, LogFormat, LoggingConfig, MailConfig,
    MailProvider, ProfileStoreConfig, ServerConfig, StoreBackend, VerificationConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{AckResponse, HealthResponse, Language};
pub use utils::email;
