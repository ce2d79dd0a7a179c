//! Authentication routes

pub mod login;
pub mod me;
pub mod register;
pub mod send_code;
pub mod verify;

use std::sync::Arc;

use lh_core::repositories::{UserRepository, VerificationCodeRepository};
use lh_core::services::auth::AuthService;
use lh_core::services::token::TokenService;
use lh_core::services::verification::EmailNotifierTrait;

/// Application state that holds shared services
pub struct AppState<U, N, V>
where
    U: UserRepository,
    N: EmailNotifierTrait + 'static,
    V: VerificationCodeRepository,
{
    pub auth_service: Arc<AuthService<U, N, V>>,
    pub token_service: Arc<TokenService>,
}
