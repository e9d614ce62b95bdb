use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use pv_core::repositories::ProfileRepository;
use pv_core::services::MailServiceTrait;
use pv_shared::utils::mask_email;
use pv_shared::AckResponse;

use crate::dto::{rejection_key, SendVerificationRequest};
use crate::handlers::error::{error_response, extract_language, handle_domain_error_with_lang};
use crate::i18n;

use super::AppState;

/// Handler for POST /api/send-verification
///
/// Issues a fresh code for the profile registered under `email`, replacing
/// any pending one, and emails it.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "ok": true, "message": "Código enviado" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or malformed email
/// - 404 Not Found: No profile with this email
/// - 500 Internal Server Error: Storage or mail failure
pub async fn send_verification<P, M>(
    req: HttpRequest,
    state: web::Data<AppState<P, M>>,
    request: web::Json<SendVerificationRequest>,
) -> HttpResponse
where
    P: ProfileRepository + 'static,
    M: MailServiceTrait + 'static,
{
    let lang = extract_language(&req);

    if let Err(errors) = request.validate() {
        tracing::warn!(event = "send_verification.rejected", errors = %errors, "Invalid send-verification request");
        return error_response(rejection_key(&errors), lang);
    }

    let email = request.into_inner().email.unwrap_or_default();

    match state.verification_service.send_verification_code(&email).await {
        Ok(result) => {
            tracing::info!(
                event = "send_verification.sent",
                email = %mask_email(&email),
                message_id = %result.message_id,
                expires_at = %result.expires_at,
                "Verification code issued"
            );
            HttpResponse::Ok().json(AckResponse::with_message(i18n::message("code_sent", lang)))
        }
        Err(error) => {
            tracing::warn!(
                event = "send_verification.failed",
                email = %mask_email(&email),
                "Could not issue verification code"
            );
            handle_domain_error_with_lang(&error, lang)
        }
    }
}
