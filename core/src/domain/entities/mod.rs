//! Domain entities representing core business objects.

pub mod profile;
pub mod verification_code;

// Re-export commonly used types
pub use profile::{PendingCode, Profile, VerificationState};
pub use verification_code::{
    digits_from_bytes, generate_numeric_code, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES,
};
