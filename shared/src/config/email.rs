//! Transactional email (notifier) configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for the transactional email provider.
///
/// The API key is optional: without one, issuance falls back to a mock
/// notifier that only logs, and code delivery is skipped safely.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Provider API key; `None` disables real delivery
    pub api_key: Option<String>,

    /// From address for outgoing mail
    pub from_address: String,

    /// Timeout for provider API requests in seconds
    pub request_timeout_secs: u64,
}

impl EmailConfig {
    /// Build the configuration from `RESEND_API_KEY` / `EMAIL_FROM`.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("RESEND_API_KEY").ok(),
            from_address: env::var("EMAIL_FROM")
                .unwrap_or_else(|_| "LearnHub <noreply@learnhub.app>".to_string()),
            request_timeout_secs: env::var("EMAIL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Whether a real provider is configured
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
