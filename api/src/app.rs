//! Application factory
//!
//! Builds the Actix-web application around an already wired
//! [`AppState`], so the binary and the integration tests share one
//! route table.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpRequest, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use pv_core::repositories::ProfileRepository;
use pv_core::services::MailServiceTrait;
use pv_shared::{AppConfig, HealthResponse};

use crate::handlers::error::{error_response, extract_language, json_error_handler};
use crate::middleware::{cors::create_cors, security::SecurityMiddleware};
use crate::routes::verification::{
    send_verification::send_verification, verify_code::verify_code, AppState,
};

pub const SERVICE_NAME: &str = "pasantias-verification";

/// Create and configure the application with all dependencies
pub fn create_app<P, M>(
    app_state: web::Data<AppState<P, M>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: ProfileRepository + 'static,
    M: MailServiceTrait + 'static,
{
    let cors = create_cors(&config.cors);
    let security = SecurityMiddleware::from_config(&config.server);
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        // Last wrapped runs first: security, then CORS, then request logging
        .wrap(TracingLogger::default())
        .wrap(cors)
        .wrap(security)
        .service(
            web::resource("/health")
                .route(web::get().to(health_check))
                .default_service(web::route().to(method_not_allowed)),
        )
        .service(
            web::scope("/api")
                .service(
                    web::resource("/send-verification")
                        .route(web::post().to(send_verification::<P, M>))
                        .default_service(web::route().to(method_not_allowed)),
                )
                .service(
                    web::resource("/verify-code")
                        .route(web::post().to(verify_code::<P, M>))
                        .default_service(web::route().to(method_not_allowed)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        SERVICE_NAME,
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Default 404 handler
async fn not_found(req: HttpRequest) -> HttpResponse {
    error_response("not_found", extract_language(&req))
}

/// Known path, wrong method
async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    error_response("method_not_allowed", extract_language(&req))
}
