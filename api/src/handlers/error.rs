//! Mapping from domain errors to localized HTTP responses

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::{header, StatusCode},
    HttpRequest, HttpResponse,
};
use pv_core::errors::{DomainError, VerificationError};
use pv_shared::{ErrorResponse, Language};

use crate::i18n;

/// Detect the client's language from the Accept-Language header
pub fn extract_language(req: &HttpRequest) -> Language {
    req.headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(Language::from_accept_language)
        .unwrap_or_default()
}

/// Message key for a domain error
///
/// Storage, mail and internal failures all share the generic key so their
/// details stay in the logs.
pub fn error_key(error: &DomainError) -> &'static str {
    match error {
        DomainError::Validation { .. } => "bad_request",
        DomainError::NotFound { .. } => "profile_not_found",
        DomainError::Verification(VerificationError::NoPendingCode) => "no_pending_code",
        DomainError::Verification(VerificationError::IncorrectCode) => "incorrect_code",
        DomainError::Verification(VerificationError::ExpiredCode) => "expired_code",
        DomainError::Storage { .. }
        | DomainError::MailDelivery { .. }
        | DomainError::Internal { .. } => "internal_error",
    }
}

/// Build the `{ error, code }` response for a message key
pub fn error_response(key: &str, lang: Language) -> HttpResponse {
    let localized = i18n::error_message(key, lang);
    let status =
        StatusCode::from_u16(localized.http_status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    HttpResponse::build(status).json(ErrorResponse::new(localized.code, localized.message))
}

/// Convert a domain error into its HTTP response
pub fn handle_domain_error_with_lang(error: &DomainError, lang: Language) -> HttpResponse {
    if error.is_client_error() {
        tracing::warn!(error = %error, lang = %lang, "Request rejected");
    } else {
        tracing::error!(error = %error, lang = %lang, "Request failed");
    }

    error_response(error_key(error), lang)
}

/// Error handler for `web::JsonConfig`
///
/// Malformed bodies, wrong field types and a missing JSON content type get
/// the same `{ error, code }` shape as every other 400.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(error = %err, path = req.path(), "Rejected request body");
    let response = error_response("invalid_body", extract_language(req));
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, test::TestRequest};

    async fn body_of(response: HttpResponse) -> ErrorResponse {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_language_detection() {
        let req = TestRequest::default()
            .insert_header((header::ACCEPT_LANGUAGE, "en-US,en;q=0.9"))
            .to_http_request();
        assert_eq!(extract_language(&req), Language::English);

        let req = TestRequest::default().to_http_request();
        assert_eq!(extract_language(&req), Language::Spanish);
    }

    #[test]
    fn test_error_keys() {
        assert_eq!(error_key(&DomainError::profile_not_found()), "profile_not_found");
        assert_eq!(error_key(&DomainError::missing_field("email")), "bad_request");
        assert_eq!(
            error_key(&VerificationError::ExpiredCode.into()),
            "expired_code"
        );
        assert_eq!(
            error_key(&DomainError::MailDelivery {
                message: "401 from provider".into()
            }),
            "internal_error"
        );
    }

    #[actix_rt::test]
    async fn test_rule_failures_are_bad_requests() {
        for (error, code) in [
            (VerificationError::NoPendingCode, "NO_PENDING_CODE"),
            (VerificationError::IncorrectCode, "INCORRECT_CODE"),
            (VerificationError::ExpiredCode, "EXPIRED_CODE"),
        ] {
            let response = handle_domain_error_with_lang(&error.into(), Language::Spanish);
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_of(response).await.code, code);
        }
    }

    #[actix_rt::test]
    async fn test_not_found_is_404() {
        let response =
            handle_domain_error_with_lang(&DomainError::profile_not_found(), Language::Spanish);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_of(response).await;
        assert_eq!(body.error, "Perfil no encontrado");
        assert_eq!(body.code, "PROFILE_NOT_FOUND");
    }

    #[actix_rt::test]
    async fn test_internal_details_do_not_leak() {
        let error = DomainError::Storage {
            message: "connection refused to db.internal:5432".into(),
        };
        let response = handle_domain_error_with_lang(&error, Language::English);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert_eq!(body.error, "Internal error");
        assert!(!body.error.contains("db.internal"));
    }
}
