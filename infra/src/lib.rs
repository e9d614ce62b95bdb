//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Pasantías
//! verification service. It provides concrete implementations of the
//! collaborators the core verification service is built against.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: PostgreSQL connection pool and profile repository using SQLx
//! - **Supabase**: Profile repository over the PostgREST HTTP interface
//! - **Store**: Backend selection between Postgres, Supabase and in-memory
//! - **Mail**: Mail provider integrations (Brevo, mock)

use pv_core::errors::DomainError;

/// Database module - PostgreSQL implementations using SQLx
pub mod database;

/// Mail service module - External mail providers
pub mod mail;

/// Profile store selection
pub mod store;

/// Supabase module - PostgREST profile access
pub mod supabase;

pub use store::ProfileStore;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail service error
    #[error("Mail service error: {0}")]
    Mail(String),

    /// Profile store returned something unusable
    #[error("Profile store error: {0}")]
    ProfileStore(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Database(_)
            | InfrastructureError::Http(_)
            | InfrastructureError::ProfileStore(_) => DomainError::Storage {
                message: error.to_string(),
            },
            InfrastructureError::Mail(message) => DomainError::MailDelivery { message },
            InfrastructureError::Config(_) | InfrastructureError::General(_) => {
                DomainError::Internal {
                    message: error.to_string(),
                }
            }
        }
    }
}
