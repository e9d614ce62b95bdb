//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{http::header, http::StatusCode, test, web};
use chrono::{DateTime, Utc};
use serde_json::Value;

use pv_api::app::create_app;
use pv_api::routes::verification::AppState;
use pv_core::domain::entities::profile::Profile;
use pv_core::repositories::{InMemoryProfileRepository, ProfileRepository};
use pv_core::services::verification::mock::{FixedCodeGenerator, ManualClock, MockMailService};
use pv_core::services::verification::{VerificationService, VerificationServiceConfig};
use pv_shared::AppConfig;

pub const EMAIL: &str = "user@example.com";
pub const CODE: &str = "482913";

pub fn t0() -> DateTime<Utc> {
    "2024-03-01T10:00:00Z".parse().unwrap()
}

pub struct TestContext {
    pub repo: Arc<InMemoryProfileRepository>,
    pub mail: Arc<MockMailService>,
    pub clock: ManualClock,
    pub state: web::Data<AppState<InMemoryProfileRepository, MockMailService>>,
    pub config: AppConfig,
}

impl TestContext {
    /// One registered, unverified profile; every issued code is `CODE`
    pub async fn new() -> Self {
        Self::with_codes(FixedCodeGenerator::new(CODE)).await
    }

    pub async fn with_codes(codes: FixedCodeGenerator) -> Self {
        let repo = Arc::new(InMemoryProfileRepository::new());
        repo.insert(Profile::new(EMAIL)).await.unwrap();
        let mail = Arc::new(MockMailService::new());
        let clock = ManualClock::new(t0());

        let service = VerificationService::new(
            repo.clone(),
            mail.clone(),
            VerificationServiceConfig::default(),
        )
        .with_clock(Arc::new(clock.clone()))
        .with_code_generator(Arc::new(codes));

        Self {
            repo,
            mail,
            clock,
            state: web::Data::new(AppState::new(Arc::new(service))),
            config: AppConfig::development(),
        }
    }

    pub async fn profile(&self) -> Profile {
        self.repo.find_by_email(EMAIL).await.unwrap().unwrap()
    }

    /// POST a JSON body and return the status with the decoded response
    pub async fn post_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.post_json_lang(path, body, None).await
    }

    pub async fn post_json_lang(
        &self,
        path: &str,
        body: Value,
        lang: Option<&str>,
    ) -> (StatusCode, Value) {
        let app = test::init_service(create_app(self.state.clone(), &self.config)).await;

        let mut req = test::TestRequest::post().uri(path).set_json(body);
        if let Some(lang) = lang {
            req = req.insert_header((header::ACCEPT_LANGUAGE, lang));
        }

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    /// POST a raw body with a JSON content type
    pub async fn post_raw(&self, path: &str, body: &'static str) -> (StatusCode, Value) {
        let app = test::init_service(create_app(self.state.clone(), &self.config)).await;

        let req = test::TestRequest::post()
            .uri(path)
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    pub async fn send(&self, email: &str) -> (StatusCode, Value) {
        self.post_json("/api/send-verification", serde_json::json!({ "email": email }))
            .await
    }

    pub async fn verify(&self, email: &str, code: &str) -> (StatusCode, Value) {
        self.post_json(
            "/api/verify-code",
            serde_json::json!({ "email": email, "code": code }),
        )
        .await
    }
}
