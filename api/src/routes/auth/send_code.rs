use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::SendCodeRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use lh_core::repositories::{UserRepository, VerificationCodeRepository};
use lh_core::services::verification::EmailNotifierTrait;
use lh_shared::types::response::MessageResponse;

use super::AppState;

/// Handler for POST /api/auth/send-code
///
/// Issues a verification code for the given email address. The response
/// is 200 whether or not the notification email could be delivered;
/// delivery is best effort.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// # Responses
/// - 200 `{message}` - Code issued
/// - 400 `{message}` - Missing or malformed email
/// - 500 `{message}` - Store failure
pub async fn send_code<U, N, V>(
    state: web::Data<AppState<U, N, V>>,
    request: web::Json<SendCodeRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    N: EmailNotifierTrait + 'static,
    V: VerificationCodeRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state.auth_service.send_code(&request.email).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Verification code sent")),
        Err(error) => handle_domain_error(error),
    }
}
