//! Authentication request/response DTOs.
//!
//! DTO validation covers presence only; business rules (name length,
//! password strength, email shape) live in the core services so that
//! every caller goes through the same checks.

use serde::{Deserialize, Serialize};
use validator::Validate;

use lh_core::domain::value_objects::UserProfile;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendCodeRequest {
    /// Email address to send the verification code to
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyRequest {
    /// Email address the code was issued for
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    /// 6-digit verification code
    #[validate(length(min = 1, message = "Verification code is required"))]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    /// Email address
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    /// Plaintext password; hashed by the account entity before storage
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    /// Optional verification code; when present, registration only
    /// succeeds if the code verifies, and the account comes out verified
    pub code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    /// Plaintext password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response body for the profile endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_code_request_requires_email() {
        let request = SendCodeRequest {
            email: String::new(),
        };
        assert!(request.validate().is_err());

        let request = SendCodeRequest {
            email: "user@example.com".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_verify_request_requires_both_fields() {
        let request = VerifyRequest {
            email: "user@example.com".to_string(),
            code: String::new(),
        };
        assert!(request.validate().is_err());

        let request = VerifyRequest {
            email: "user@example.com".to_string(),
            code: "123456".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_code_is_optional() {
        let request = RegisterRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "password123".to_string(),
            code: None,
        };
        assert!(request.validate().is_ok());
    }
}
