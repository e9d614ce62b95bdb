//! Unit tests for mock mail service

use crate::mail::{MailService, MockMailService};
use crate::InfrastructureError;

#[tokio::test]
async fn test_mock_mail_send_success() {
    let service = MockMailService::with_options(false, false);
    let result = service
        .send_email("user@example.com", "Subject", "Text", "<p>Html</p>")
        .await;

    let message_id = result.unwrap();
    assert!(message_id.starts_with("mock_"));
    assert_eq!(service.get_message_count(), 1);
}

#[tokio::test]
async fn test_mock_mail_invalid_recipient() {
    let service = MockMailService::with_options(false, false);
    let result = service.send_email("not-an-email", "S", "T", "H").await;

    match result {
        Err(InfrastructureError::Mail(msg)) => assert!(msg.contains("Invalid recipient")),
        other => panic!("Expected Mail error, got {:?}", other),
    }
    assert_eq!(service.get_message_count(), 0);
}

#[tokio::test]
async fn test_mock_mail_simulate_failure() {
    let service = MockMailService::with_options(false, true);
    assert!(service
        .send_email("user@example.com", "S", "T", "H")
        .await
        .is_err());
    assert!(!service.is_available().await);

    service.set_simulate_failure(false);
    assert!(service.is_available().await);
}

#[tokio::test]
async fn test_mock_mail_counter() {
    let service = MockMailService::with_options(false, false);

    for i in 1..=3 {
        let _ = service.send_email("user@example.com", "S", "T", "H").await;
        assert_eq!(service.get_message_count(), i);
    }
}

#[test]
fn test_provider_name() {
    assert_eq!(MockMailService::new().provider_name(), "Mock");
}
