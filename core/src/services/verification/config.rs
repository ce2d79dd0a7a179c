//! Configuration for the verification service

use crate::domain::entities::verification_code::DEFAULT_TTL_MINUTES;

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Number of minutes before a verification code expires
    pub code_ttl_minutes: i64,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: DEFAULT_TTL_MINUTES,
        }
    }
}
