use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;

use pv_api::{app::create_app, routes::verification::AppState, telemetry};
use pv_core::services::VerificationService;
use pv_infra::mail::{create_mail_service, MailServiceAdapter};
use pv_infra::ProfileStore;
use pv_shared::{AppConfig, Environment};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Shared .env first, then the environment-specific file
    dotenvy::dotenv().ok();
    dotenvy::from_filename(Environment::from_env().env_file()).ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    telemetry::init_tracing(&config.logging)?;

    info!(
        environment = %config.environment,
        store = ?config.store.backend,
        mail = ?config.mail.provider,
        "Starting Pasantías verification server"
    );

    let store = ProfileStore::from_config(&config)
        .await
        .context("Failed to initialize the profile store")?;

    let mail = create_mail_service(&config.mail, !config.environment.is_production())
        .context("Failed to initialize the mail service")?;
    let mail = MailServiceAdapter::new(mail);
    info!(provider = mail.provider_name(), "Mail service ready");

    let verification_service = VerificationService::new(
        Arc::new(store),
        Arc::new(mail),
        (&config.verification).into(),
    );
    let app_state = web::Data::new(AppState::new(Arc::new(verification_service)));

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server will bind");

    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &app_config))
        .keep_alive(Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    info!("Server stopped");
    Ok(())
}
