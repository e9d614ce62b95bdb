//! HTTP tests for POST /api/send-verification

mod common;

use actix_web::http::StatusCode;
use chrono::Duration;
use serde_json::json;

use common::{t0, TestContext, CODE, EMAIL};
use pv_core::domain::entities::profile::VerificationState;
use pv_core::services::verification::mock::FixedCodeGenerator;

#[actix_rt::test]
async fn test_send_verification_success() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx.send(EMAIL).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true, "message": "Código enviado" }));

    let profile = ctx.profile().await;
    assert_eq!(profile.email_verification_code.as_deref(), Some(CODE));
    assert_eq!(profile.code_expires_at, Some(t0() + Duration::minutes(15)));
    assert_eq!(profile.verification_state(), VerificationState::Pending);

    assert_eq!(ctx.mail.sent_count(), 1);
    let sent = ctx.mail.last_sent_to(EMAIL).unwrap();
    assert!(sent.text_body.contains(CODE));
    assert!(sent.html_body.contains(CODE));
}

#[actix_rt::test]
async fn test_send_verification_english_message() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx
        .post_json_lang(
            "/api/send-verification",
            json!({ "email": EMAIL }),
            Some("en-US,en;q=0.9"),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Verification code sent");
}

#[actix_rt::test]
async fn test_unknown_email_is_not_found() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx.send("nobody@example.com").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Perfil no encontrado");
    assert_eq!(body["code"], "PROFILE_NOT_FOUND");
    assert_eq!(ctx.mail.sent_count(), 0);
}

#[actix_rt::test]
async fn test_missing_email_is_bad_request() {
    let ctx = TestContext::new().await;

    for body in [json!({}), json!({ "email": null }), json!({ "email": "" })] {
        let (status, response) = ctx.post_json("/api/send-verification", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"], "Email requerido");
        assert_eq!(response["code"], "BAD_REQUEST");
    }
    assert_eq!(ctx.mail.sent_count(), 0);
}

#[actix_rt::test]
async fn test_malformed_email_is_bad_request() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx.send("not-an-email").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email inválido");
}

#[actix_rt::test]
async fn test_malformed_json_is_bad_request() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx.post_raw("/api/send-verification", "{\"email\": ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[actix_rt::test]
async fn test_mail_failure_keeps_issued_code() {
    let ctx = TestContext::new().await;
    ctx.mail.set_should_fail(true);

    let (status, body) = ctx.send(EMAIL).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INTERNAL_ERROR");
    assert_eq!(body["error"], "Error interno");
    assert_eq!(ctx.profile().await.email_verification_code.as_deref(), Some(CODE));
}

#[actix_rt::test]
async fn test_storage_failure_is_internal_error() {
    let ctx = TestContext::new().await;
    ctx.repo.set_fail_writes(true);

    let (status, body) = ctx.send(EMAIL).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INTERNAL_ERROR");
    assert_eq!(ctx.mail.sent_count(), 0);
}

#[actix_rt::test]
async fn test_reissue_replaces_pending_code() {
    let ctx = TestContext::with_codes(FixedCodeGenerator::sequence(["111111", "222222"])).await;

    ctx.send(EMAIL).await;
    ctx.clock.advance(Duration::minutes(10));
    let (status, _) = ctx.send(EMAIL).await;
    assert_eq!(status, StatusCode::OK);

    let profile = ctx.profile().await;
    assert_eq!(profile.email_verification_code.as_deref(), Some("222222"));
    assert_eq!(profile.code_expires_at, Some(t0() + Duration::minutes(25)));

    let (status, body) = ctx.verify(EMAIL, "111111").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INCORRECT_CODE");
}
