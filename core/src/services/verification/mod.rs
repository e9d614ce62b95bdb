//! Verification service module for email-based address confirmation
//!
//! This module provides the verification code workflow:
//! - Code generation, persistence on the profile and delivery by email
//! - Code checking in a fixed order with an atomic consume
//! - Seams for the mail transport, the clock and the code source

mod config;
mod message;
pub mod mock;
mod service;
mod traits;
mod types;


pub use config::VerificationServiceConfig;
pub use message::VerificationEmail;
pub use service::VerificationService;
pub use traits::{Clock, CodeGenerator, MailServiceTrait, SecureCodeGenerator, SystemClock};
pub use types::{SendCodeResult, VerifyCodeResult};
