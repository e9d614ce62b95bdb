//! Unit tests for domain error types

use crate::errors::{DomainError, VerificationError};

#[test]
fn test_verification_error_bridges_into_domain_error() {
    let error: DomainError = VerificationError::ExpiredCode.into();
    assert!(matches!(
        error,
        DomainError::Verification(VerificationError::ExpiredCode)
    ));
    assert_eq!(error.to_string(), "Verification code expired");
}

#[test]
fn test_client_error_classification() {
    assert!(DomainError::missing_field("email").is_client_error());
    assert!(DomainError::profile_not_found().is_client_error());
    assert!(DomainError::from(VerificationError::IncorrectCode).is_client_error());

    let storage = DomainError::Storage {
        message: "connection reset".to_string(),
    };
    let mail = DomainError::MailDelivery {
        message: "401 unauthorized".to_string(),
    };
    assert!(!storage.is_client_error());
    assert!(!mail.is_client_error());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        DomainError::missing_field("code").to_string(),
        "Validation error: code is required"
    );
    assert_eq!(
        DomainError::profile_not_found().to_string(),
        "Resource not found: profile"
    );
}
