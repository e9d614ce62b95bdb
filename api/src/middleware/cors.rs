//! CORS middleware configuration for cross-origin requests.
//!
//! The portal's single-page app is served from a different origin than the
//! API, so every deployment needs CORS. Development accepts any origin;
//! other environments only accept the configured origin list.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use pv_shared::CorsConfig;

/// Creates a CORS middleware instance from configuration.
///
/// A `*` entry in `allowed_origins` accepts any origin. Credentials are only
/// enabled for an explicit origin list since browsers reject them with a
/// wildcard.
pub fn create_cors(config: &CorsConfig) -> Cors {
    if config.allows_any_origin() {
        tracing::info!("Configuring permissive CORS");
        return base_cors(config.max_age).allow_any_origin();
    }

    if config.allowed_origins.is_empty() {
        tracing::warn!("No CORS origins configured; cross-origin requests will be rejected");
    }

    let mut cors = base_cors(config.max_age);
    for origin in config
        .allowed_origins
        .iter()
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
    {
        tracing::info!(origin, "Adding allowed origin");
        cors = cors.allowed_origin(origin);
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}

fn base_cors(max_age: usize) -> Cors {
    Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(max_age)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    async fn preflight(config: CorsConfig, origin: &str) -> StatusCode {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&config))
                .route("/api/verify-code", web::post().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/verify-code")
            .insert_header((header::ORIGIN, origin))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .to_request();
        test::call_service(&app, req).await.status()
    }

    #[actix_rt::test]
    async fn test_development_accepts_any_origin() {
        let status = preflight(CorsConfig::development(), "http://localhost:5173").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_rt::test]
    async fn test_configured_origin_list() {
        let config = CorsConfig {
            allowed_origins: vec!["https://pasantias.unerg.edu.ve".to_string()],
            ..Default::default()
        };
        assert_eq!(
            preflight(config.clone(), "https://pasantias.unerg.edu.ve").await,
            StatusCode::OK
        );
        assert_ne!(preflight(config, "https://evil.example").await, StatusCode::OK);
    }
}
