//! Domain-error → HTTP response mapping.
//!
//! Business-rule rejections become 400s carrying their fixed message,
//! a vanished user becomes 404, token problems 401, and everything else
//! collapses to a generic 500 with the detail kept in the logs.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use lh_core::errors::{AuthError, DomainError};
use lh_shared::types::response::ErrorResponse;

/// Convert a domain error into the appropriate HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match &error {
        DomainError::Auth(AuthError::UserNotFound) => {
            HttpResponse::NotFound().json(ErrorResponse::new(error.to_string()))
        }
        DomainError::Auth(_) => HttpResponse::BadRequest().json(ErrorResponse::new(error.to_string())),
        DomainError::ValidationErr(_) | DomainError::Validation { .. } => {
            HttpResponse::BadRequest().json(ErrorResponse::new(error.to_string()))
        }
        DomainError::NotFound { .. } => {
            HttpResponse::NotFound().json(ErrorResponse::new(error.to_string()))
        }
        DomainError::Token(_) => {
            HttpResponse::Unauthorized().json(ErrorResponse::new(error.to_string()))
        }
        DomainError::Database { .. } | DomainError::Internal { .. } => {
            tracing::error!(error = %error, "Unhandled infrastructure error");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("An internal error occurred"))
        }
    }
}

/// Convert DTO validation failures into a 400 with the first message
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid request data".to_string());

    HttpResponse::BadRequest().json(ErrorResponse::new(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lh_core::errors::ValidationError;

    #[test]
    fn test_auth_error_maps_to_400() {
        let response = handle_domain_error(AuthError::InvalidVerificationCode.into());
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_user_not_found_maps_to_404() {
        let response = handle_domain_error(AuthError::UserNotFound.into());
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_error_maps_to_400() {
        let response = handle_domain_error(ValidationError::NameTooShort.into());
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_maps_to_500() {
        let response = handle_domain_error(DomainError::Database {
            message: "connection refused".to_string(),
        });
        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
