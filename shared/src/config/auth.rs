//! Authentication configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Default session token lifetime in days
pub const DEFAULT_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Default verification code lifetime in minutes
pub const DEFAULT_CODE_TTL_MINUTES: i64 = 15;

/// Configuration for token signing and verification code lifetime
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret used to sign session tokens (HS256)
    pub jwt_secret: String,

    /// Session token lifetime in days
    pub token_expiry_days: i64,

    /// Verification code lifetime in minutes
    pub code_ttl_minutes: i64,
}

impl AuthConfig {
    /// Build the configuration from environment variables.
    ///
    /// `JWT_SECRET` is required; lifetimes fall back to the defaults above.
    pub fn from_env() -> Result<Self, String> {
        let jwt_secret = env::var("JWT_SECRET").map_err(|_| "JWT_SECRET not set".to_string())?;

        Ok(Self {
            jwt_secret,
            token_expiry_days: env::var("JWT_EXPIRY_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_EXPIRY_DAYS),
            code_ttl_minutes: env::var("CODE_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CODE_TTL_MINUTES),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig {
            jwt_secret: "secret".to_string(),
            token_expiry_days: DEFAULT_TOKEN_EXPIRY_DAYS,
            code_ttl_minutes: DEFAULT_CODE_TTL_MINUTES,
        };
        assert_eq!(config.token_expiry_days, 7);
        assert_eq!(config.code_ttl_minutes, 15);
    }
}
