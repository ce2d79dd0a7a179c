use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::VerifyRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use lh_core::repositories::{UserRepository, VerificationCodeRepository};
use lh_core::services::verification::EmailNotifierTrait;

use super::AppState;

/// Handler for POST /api/auth/verify
///
/// Consumes a verification code and marks the matching user's email as
/// verified.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "code": "123456" }
/// ```
///
/// # Responses
/// - 200 `{token, user}` - Email verified, session issued
/// - 400 `{message}` - Invalid, expired, exhausted, or used code
/// - 404 `{message}` - Code verified but no matching user exists
/// - 500 `{message}` - Store failure
pub async fn verify<U, N, V>(
    state: web::Data<AppState<U, N, V>>,
    request: web::Json<VerifyRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    N: EmailNotifierTrait + 'static,
    V: VerificationCodeRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .auth_service
        .verify_email(&request.email, &request.code)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => handle_domain_error(error),
    }
}
