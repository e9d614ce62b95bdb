//! Email address helpers

use once_cell::sync::Lazy;
use regex::Regex;

/// Pragmatic address shape check: one `@`, no whitespace, a dotted domain
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// Check whether a string looks like a deliverable email address
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= 254 && EMAIL_REGEX.is_match(email)
}

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the full domain:
/// `maria.perez@unerg.edu.ve` becomes `m***@unerg.edu.ve`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}
