//! Session token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default session token lifetime (7 days)
pub const DEFAULT_TOKEN_EXPIRY_DAYS: i64 = 7;

/// JWT issuer
pub const JWT_ISSUER: &str = "learnhub";

/// JWT audience
pub const JWT_AUDIENCE: &str = "learnhub-api";

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Email address of the authenticated user
    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for a session token
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `email` - The user's normalized email address
    /// * `expiry_days` - Token lifetime in days
    pub fn new_session_token(user_id: Uuid, email: String, expiry_days: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::days(expiry_days);

        Self {
            sub: user_id.to_string(),
            email,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_token_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_session_token(
            user_id,
            "user@example.com".to_string(),
            DEFAULT_TOKEN_EXPIRY_DAYS,
        );

        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.aud, JWT_AUDIENCE);
        assert!(!claims.is_expired());

        let lifetime = claims.exp - claims.iat;
        assert_eq!(lifetime, DEFAULT_TOKEN_EXPIRY_DAYS * 24 * 60 * 60);
    }

    #[test]
    fn test_jti_uniqueness() {
        let user_id = Uuid::new_v4();
        let a = Claims::new_session_token(user_id, "a@example.com".to_string(), 7);
        let b = Claims::new_session_token(user_id, "a@example.com".to_string(), 7);
        assert_ne!(a.jti, b.jti);
    }
}
