//! Configuration for the token service

use crate::domain::entities::token::DEFAULT_TOKEN_EXPIRY_DAYS;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret used for HS256 signing
    pub jwt_secret: String,

    /// Token lifetime in days
    pub expiry_days: i64,
}

impl TokenServiceConfig {
    /// Create a configuration with the default lifetime
    pub fn new(jwt_secret: String) -> Self {
        Self {
            jwt_secret,
            expiry_days: DEFAULT_TOKEN_EXPIRY_DAYS,
        }
    }
}
