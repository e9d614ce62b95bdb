//! # Pasantías Core
//!
//! Core business logic for the internship portal's email verification flow.
//! This crate contains the profile entity, the verification code policy, the
//! verification service, the profile repository interface and the error
//! types the other layers build on.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
