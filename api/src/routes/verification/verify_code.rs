use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use pv_core::repositories::ProfileRepository;
use pv_core::services::MailServiceTrait;
use pv_shared::utils::mask_email;
use pv_shared::AckResponse;

use crate::dto::{rejection_key, VerifyCodeRequest};
use crate::handlers::error::{error_response, extract_language, handle_domain_error_with_lang};

use super::AppState;

/// Handler for POST /api/verify-code
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "code": "482913" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "ok": true }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing fields, no pending code, incorrect or expired code
/// - 404 Not Found: No profile with this email
/// - 500 Internal Server Error: Storage failure
pub async fn verify_code<P, M>(
    req: HttpRequest,
    state: web::Data<AppState<P, M>>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse
where
    P: ProfileRepository + 'static,
    M: MailServiceTrait + 'static,
{
    let lang = extract_language(&req);

    if let Err(errors) = request.validate() {
        tracing::warn!(event = "verify_code.rejected", errors = %errors, "Invalid verify-code request");
        return error_response(rejection_key(&errors), lang);
    }

    let VerifyCodeRequest { email, code } = request.into_inner();
    let email = email.unwrap_or_default();
    let code = code.unwrap_or_default();

    match state.verification_service.verify_code(&email, &code).await {
        Ok(result) => {
            tracing::info!(
                event = "verify_code.verified",
                email = %mask_email(&email),
                profile_id = %result.profile_id,
                "Email verified"
            );
            HttpResponse::Ok().json(AckResponse::ok())
        }
        Err(error) => {
            tracing::warn!(
                event = "verify_code.failed",
                email = %mask_email(&email),
                "Verification code rejected"
            );
            handle_domain_error_with_lang(&error, lang)
        }
    }
}
