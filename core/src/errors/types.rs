//! Error type definitions for authentication, token management, and
//! validation operations.
//!
//! The `#[error]` strings on `AuthError` and `ValidationError` are the
//! exact messages clients receive in 400 responses, so they are part of
//! the API contract and must not be reworded casually.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid verification code")]
    InvalidVerificationCode,

    #[error("Code already used")]
    CodeAlreadyUsed,

    #[error("Too many failed attempts")]
    TooManyAttempts,

    #[error("Code expired")]
    CodeExpired,

    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Name must be at least 2 characters long")]
    NameTooShort,

    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_rejection_messages() {
        assert_eq!(
            AuthError::InvalidVerificationCode.to_string(),
            "Invalid verification code"
        );
        assert_eq!(AuthError::CodeAlreadyUsed.to_string(), "Code already used");
        assert_eq!(
            AuthError::TooManyAttempts.to_string(),
            "Too many failed attempts"
        );
        assert_eq!(AuthError::CodeExpired.to_string(), "Code expired");
        assert_eq!(
            AuthError::EmailAlreadyRegistered.to_string(),
            "Email already registered"
        );
    }

    #[test]
    fn test_name_length_message() {
        assert_eq!(
            ValidationError::NameTooShort.to_string(),
            "Name must be at least 2 characters long"
        );
    }
}
