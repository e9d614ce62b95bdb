//! Request bodies for the verification endpoints
//!
//! Fields are optional so that an absent field is reported by validation
//! with a localized message instead of failing JSON extraction.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Message keys a validation failure can resolve to, most specific first
const REJECTION_PRIORITY: [&str; 3] = ["email_and_code_required", "email_required", "invalid_email"];

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendVerificationRequest {
    #[validate(
        required(message = "email_required"),
        length(min = 1, message = "email_required"),
        email(message = "invalid_email")
    )]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[validate(
        required(message = "email_and_code_required"),
        length(min = 1, message = "email_and_code_required"),
        email(message = "invalid_email")
    )]
    pub email: Option<String>,

    /// Submitted as typed; a malformed code is simply an incorrect one
    #[validate(
        required(message = "email_and_code_required"),
        length(min = 1, message = "email_and_code_required")
    )]
    pub code: Option<String>,
}

/// Pick the message key to report for a failed validation
///
/// An empty string fails both the length and the email check; the missing
/// field message wins over the syntax one.
pub fn rejection_key(errors: &ValidationErrors) -> &'static str {
    let reported: Vec<&str> = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .filter_map(|e| e.message.as_deref())
        .collect();

    REJECTION_PRIORITY
        .iter()
        .find(|key| reported.contains(key))
        .copied()
        .unwrap_or("bad_request")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send(email: Option<&str>) -> SendVerificationRequest {
        SendVerificationRequest {
            email: email.map(String::from),
        }
    }

    fn verify(email: Option<&str>, code: Option<&str>) -> VerifyCodeRequest {
        VerifyCodeRequest {
            email: email.map(String::from),
            code: code.map(String::from),
        }
    }

    #[test]
    fn test_send_request_validation() {
        assert!(send(Some("user@example.com")).validate().is_ok());

        let missing = send(None).validate().unwrap_err();
        assert_eq!(rejection_key(&missing), "email_required");

        let empty = send(Some("")).validate().unwrap_err();
        assert_eq!(rejection_key(&empty), "email_required");

        let malformed = send(Some("not-an-email")).validate().unwrap_err();
        assert_eq!(rejection_key(&malformed), "invalid_email");
    }

    #[test]
    fn test_verify_request_validation() {
        assert!(verify(Some("user@example.com"), Some("482913")).validate().is_ok());

        let no_code = verify(Some("user@example.com"), None).validate().unwrap_err();
        assert_eq!(rejection_key(&no_code), "email_and_code_required");

        let no_email = verify(None, Some("482913")).validate().unwrap_err();
        assert_eq!(rejection_key(&no_email), "email_and_code_required");

        let both_bad = verify(Some("nope"), Some("")).validate().unwrap_err();
        assert_eq!(rejection_key(&both_bad), "email_and_code_required");
    }

    #[test]
    fn test_code_format_not_checked() {
        assert!(verify(Some("user@example.com"), Some("12ab")).validate().is_ok());
    }

    #[test]
    fn test_missing_fields_deserialize() {
        let request: VerifyCodeRequest = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
        assert_eq!(request.email.as_deref(), Some("a@b.com"));
        assert!(request.code.is_none());
    }
}
