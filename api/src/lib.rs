//! HTTP layer of the Pasantías verification server
//!
//! Exposes the application factory and its building blocks so the binary
//! and the integration tests assemble the same app.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod routes;
pub mod telemetry;
