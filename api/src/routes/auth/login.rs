use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::LoginRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use lh_core::repositories::{UserRepository, VerificationCodeRepository};
use lh_core::services::verification::EmailNotifierTrait;

use super::AppState;

/// Handler for POST /api/auth/login
///
/// Authenticates with email and password. Login is independent of the
/// verification code system and is not gated on `is_verified`.
///
/// # Responses
/// - 200 `{token, user}` - Authenticated
/// - 400 `{message}` - Invalid credentials
/// - 500 `{message}` - Store failure
pub async fn login<U, N, V>(
    state: web::Data<AppState<U, N, V>>,
    request: web::Json<LoginRequest>,
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
        .login(&request.email, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => handle_domain_error(error),
    }
}
