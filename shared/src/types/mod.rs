//! Type definitions module
//!
//! - `language` - Language negotiation for localized messages
//! - `response` - Acknowledgement and health bodies

pub mod language;
pub mod response;

pub use language::Language;
pub use response::{AckResponse, HealthResponse};
