use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::RegisterRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use lh_core::repositories::{UserRepository, VerificationCodeRepository};
use lh_core::services::verification::EmailNotifierTrait;

use super::AppState;

/// Handler for POST /api/auth/register
///
/// Creates an account. With a verification code the account comes out
/// verified; without one it is created unverified. A passwordless record
/// left behind by a partial flow is upgraded in place.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Alice",
///     "email": "alice@example.com",
///     "password": "secret-password",
///     "code": "123456"
/// }
/// ```
///
/// # Responses
/// - 200 `{token, user}` - Account created or upgraded
/// - 400 `{message}` - Validation failure, duplicate email, or bad code
/// - 500 `{message}` - Store failure
pub async fn register<U, N, V>(
    state: web::Data<AppState<U, N, V>>,
    request: web::Json<RegisterRequest>,
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
        .register(
            &request.name,
            &request.email,
            &request.password,
            request.code.as_deref(),
        )
        .await
    {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => handle_domain_error(error),
    }
}
