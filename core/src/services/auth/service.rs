//! Main authentication service implementation

use std::sync::Arc;

use lh_shared::utils::email::{is_valid_email, mask_email, normalize_email};
use lh_shared::utils::validation::{is_valid_name, MIN_PASSWORD_LENGTH};
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::entities::verification_code::CodePurpose;
use crate::domain::value_objects::{AuthResponse, UserProfile};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{UserRepository, VerificationCodeRepository};
use crate::services::token::TokenService;
use crate::services::verification::{EmailNotifierTrait, VerificationService};

/// Authentication service orchestrating the code lifecycle, the account
/// store, and the token issuer.
///
/// Code consumption and the user update that follows it are two separate
/// store operations; a crash in between leaves the code consumed and the
/// user unverified, which a fresh code resolves.
pub struct AuthService<U, N, V>
where
    U: UserRepository,
    N: EmailNotifierTrait + 'static,
    V: VerificationCodeRepository,
{
    /// User repository for account persistence
    user_repository: Arc<U>,
    /// Verification service for email code handling
    verification_service: Arc<VerificationService<N, V>>,
    /// Token service for session tokens
    token_service: Arc<TokenService>,
}

impl<U, N, V> AuthService<U, N, V>
where
    U: UserRepository,
    N: EmailNotifierTrait + 'static,
    V: VerificationCodeRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for account persistence
    /// * `verification_service` - Service for email verification codes
    /// * `token_service` - Service for session token management
    pub fn new(
        user_repository: Arc<U>,
        verification_service: Arc<VerificationService<N, V>>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repository,
            verification_service,
            token_service,
        }
    }

    /// Request a verification code for an email address
    ///
    /// Succeeds regardless of whether the notification could be
    /// delivered; the notifier is best effort.
    pub async fn send_code(&self, email: &str) -> DomainResult<()> {
        require_field("email", email)?;

        self.verification_service
            .issue_code(email, CodePurpose::EmailVerification)
            .await?;

        Ok(())
    }

    /// Verify an email address with a previously issued code
    ///
    /// This method:
    /// 1. Delegates to the verification service (state-checked lookup,
    ///    conditional consume, purge)
    /// 2. Marks the matching user as verified
    /// 3. Mints a session token
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Token and user profile
    /// * `Err(DomainError)` - Code rejection, missing user, or store failure
    pub async fn verify_email(&self, email: &str, code: &str) -> DomainResult<AuthResponse> {
        require_field("email", email)?;
        require_field("code", code)?;

        let result = self
            .verification_service
            .verify_code(email, code, CodePurpose::EmailVerification)
            .await?;
        if let Some(rejection) = result.rejection {
            return Err(rejection.as_auth_error().into());
        }

        let email = normalize_email(email);
        let mut user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        user.mark_verified();
        user.update_last_login();
        let user = self.user_repository.update(user).await?;

        tracing::info!(
            email = %mask_email(&user.email),
            user_id = %user.id,
            event = "email_verified",
            "User email verified"
        );

        let token = self.token_service.generate_token(user.id, &user.email)?;
        Ok(AuthResponse::new(token, &user))
    }

    /// Register a new account, optionally verifying it in the same call
    ///
    /// With a code supplied, verification must pass before the account is
    /// touched and the account comes out verified. Without one, the
    /// account is created unverified. An existing record that already has
    /// a password is rejected; an existing passwordless record (e.g. from
    /// a partial OAuth flow) is upgraded in place.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        code: Option<&str>,
    ) -> DomainResult<AuthResponse> {
        let name = name.trim();
        if !is_valid_name(name) {
            return Err(ValidationError::NameTooShort.into());
        }

        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort.into());
        }

        let mut verified_by_code = false;
        if let Some(code) = code {
            let result = self
                .verification_service
                .verify_code(&email, code, CodePurpose::EmailVerification)
                .await?;
            match result.rejection {
                Some(rejection) => return Err(rejection.as_auth_error().into()),
                None => verified_by_code = true,
            }
        }

        let user = match self.user_repository.find_by_email(&email).await? {
            Some(existing) if existing.has_password() => {
                return Err(AuthError::EmailAlreadyRegistered.into());
            }
            Some(mut existing) => {
                // Passwordless record from a partial flow: upgrade in place
                existing.set_name(name.to_string());
                existing.set_password(password)?;
                if verified_by_code {
                    existing.mark_verified();
                }
                existing.update_last_login();
                self.user_repository.update(existing).await?
            }
            None => {
                let mut user = User::new(email.clone(), name.to_string());
                user.set_password(password)?;
                if verified_by_code {
                    user.mark_verified();
                }
                user.update_last_login();
                self.user_repository.create(user).await?
            }
        };

        tracing::info!(
            email = %mask_email(&user.email),
            user_id = %user.id,
            verified = user.is_verified,
            event = "user_registered",
            "User registered"
        );

        let token = self.token_service.generate_token(user.id, &user.email)?;
        Ok(AuthResponse::new(token, &user))
    }

    /// Authenticate with email and password
    ///
    /// Lookup failure, a passwordless account, and a wrong password all
    /// produce the same rejection. Login is not gated on `is_verified`.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        require_field("email", email)?;
        require_field("password", password)?;

        let email = normalize_email(email);
        let mut user = match self.user_repository.find_by_email(&email).await? {
            Some(user) if user.has_password() && user.verify_password(password) => user,
            _ => {
                tracing::warn!(
                    email = %mask_email(&email),
                    event = "login_failed",
                    "Login rejected"
                );
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        user.update_last_login();
        let user = self.user_repository.update(user).await?;

        let token = self.token_service.generate_token(user.id, &user.email)?;
        Ok(AuthResponse::new(token, &user))
    }

    /// Fetch the public profile for an authenticated user
    pub async fn get_profile(&self, user_id: Uuid) -> DomainResult<UserProfile> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        Ok(UserProfile::from(&user))
    }
}

/// Reject empty or whitespace-only required fields
fn require_field(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        }
        .into());
    }
    Ok(())
}
