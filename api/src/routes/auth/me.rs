use actix_web::{web, HttpResponse};

use crate::dto::auth::ProfileResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

use lh_core::repositories::{UserRepository, VerificationCodeRepository};
use lh_core::services::verification::EmailNotifierTrait;

use super::AppState;

/// Handler for GET /api/auth/me
///
/// Returns the authenticated user's profile. Requires a valid bearer
/// token; the JWT middleware populates the [`AuthContext`].
///
/// # Responses
/// - 200 `{user}` - Profile
/// - 401 - Missing or invalid token
/// - 404 `{message}` - Token valid but the user no longer exists
pub async fn me<U, N, V>(
    state: web::Data<AppState<U, N, V>>,
    context: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    N: EmailNotifierTrait + 'static,
    V: VerificationCodeRepository + 'static,
{
    match state.auth_service.get_profile(context.user_id).await {
        Ok(user) => HttpResponse::Ok().json(ProfileResponse { user }),
        Err(error) => handle_domain_error(error),
    }
}
