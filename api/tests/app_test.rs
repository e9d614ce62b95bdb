//! Health check, fallback routes and middleware wiring

mod common;

use actix_web::http::{header, Method, StatusCode};
use actix_web::test;

use common::TestContext;
use pv_api::app::{create_app, SERVICE_NAME};
use pv_shared::CorsConfig;

#[actix_rt::test]
async fn test_health_check() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["service"], SERVICE_NAME);
}

#[actix_rt::test]
async fn test_unknown_route_is_not_found() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/unknown").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[actix_rt::test]
async fn test_wrong_method_keeps_error_shape() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    for (method, uri) in [
        (Method::GET, "/api/verify-code"),
        (Method::PUT, "/api/send-verification"),
        (Method::POST, "/health"),
    ] {
        let req = test::TestRequest::default().method(method).uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", uri);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "METHOD_NOT_ALLOWED");
        assert_eq!(body["error"], "Método no permitido");
    }
}

#[actix_rt::test]
async fn test_cors_preflight_in_development() {
    let ctx = TestContext::new().await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/send-verification")
        .insert_header((header::ORIGIN, "http://localhost:5173"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[actix_rt::test]
async fn test_security_headers_follow_config() {
    let mut ctx = TestContext::new().await;
    ctx.config.server.security_headers = true;
    ctx.config.cors = CorsConfig::development();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(
        resp.headers().get(header::X_FRAME_OPTIONS).unwrap(),
        "DENY"
    );
}
