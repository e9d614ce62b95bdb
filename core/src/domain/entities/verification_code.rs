//! Verification code generation for email-based verification.

use rand::{rngs::OsRng, RngCore};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (15 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 15;

/// Generates a numeric code of `length` digits from the OS CSPRNG
///
/// Draws one random byte per digit and reduces it modulo 10. Since 256 is
/// not a multiple of 10, digits 0-5 come up with probability 26/256 and
/// digits 6-9 with 25/256. The bias is accepted: codes are single-use and
/// expire after minutes.
///
/// # Returns
///
/// A string of exactly `length` ASCII digits; leading zeros are kept
pub fn generate_numeric_code(length: usize) -> String {
    let mut bytes = vec![0u8; length];
    OsRng.fill_bytes(&mut bytes);
    digits_from_bytes(&bytes)
}

/// Maps each byte to the decimal digit `byte % 10`, preserving order
pub fn digits_from_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|b| char::from(b'0' + b % 10)).collect()
}
