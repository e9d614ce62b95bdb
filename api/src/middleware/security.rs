//! Security headers middleware.
//!
//! Adds HSTS, content-type, framing and referrer headers to every response
//! when enabled. TLS terminates at the deployment's reverse proxy, so the
//! middleware never rejects plain HTTP itself.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{self, HeaderValue},
    Error,
};
use futures_util::future::LocalBoxFuture;
use pv_shared::ServerConfig;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

/// Security middleware factory
#[derive(Debug, Clone, Copy)]
pub struct SecurityMiddleware {
    /// Whether to add security headers
    add_security_headers: bool,
}

impl SecurityMiddleware {
    pub fn new(add_security_headers: bool) -> Self {
        Self {
            add_security_headers,
        }
    }

    /// Middleware configured from the server settings
    pub fn from_config(config: &ServerConfig) -> Self {
        tracing::info!(
            add_headers = config.security_headers,
            "Security middleware configured"
        );
        Self::new(config.security_headers)
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityMiddlewareService {
            service: Rc::new(service),
            add_security_headers: self.add_security_headers,
        }))
    }
}

/// Security middleware service implementation
pub struct SecurityMiddlewareService<S> {
    service: Rc<S>,
    add_security_headers: bool,
}

impl<S, B> Service<ServiceRequest> for SecurityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let add_security_headers = self.add_security_headers;

        Box::pin(async move {
            let mut response = service.call(req).await?;

            if add_security_headers {
                add_security_response_headers(&mut response);
            }

            Ok(response)
        })
    }
}

/// Adds security headers to the response
fn add_security_response_headers<B>(response: &mut ServiceResponse<B>) {
    let headers = response.headers_mut();

    headers.insert(
        header::STRICT_TRANSPORT_SECURITY,
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    // JSON only; nothing to load
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'"),
    );
}
