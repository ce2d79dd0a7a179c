//! Mock email notifier for development and testing.
//!
//! Logs verification codes instead of delivering them, so the full
//! authentication flow stays usable without a provider account. Selected
//! at startup when no API key is configured.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

use lh_core::services::verification::EmailNotifierTrait;
use lh_shared::utils::email::mask_email;

/// Mock mailer that logs codes instead of sending them
pub struct MockMailer {
    /// Number of sends accepted, for test assertions
    send_count: AtomicU64,
    /// Whether every send should fail
    simulate_failure: bool,
}

impl MockMailer {
    /// Create a new mock mailer
    pub fn new() -> Self {
        Self {
            send_count: AtomicU64::new(0),
            simulate_failure: false,
        }
    }

    /// A mailer whose every send fails
    pub fn failing() -> Self {
        Self {
            send_count: AtomicU64::new(0),
            simulate_failure: true,
        }
    }

    /// Number of sends accepted so far
    pub fn send_count(&self) -> u64 {
        self.send_count.load(Ordering::SeqCst)
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailNotifierTrait for MockMailer {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        if self.simulate_failure {
            return Err("simulated delivery failure".to_string());
        }

        let count = self.send_count.fetch_add(1, Ordering::SeqCst) + 1;
        let message_id = format!("mock_{}", Uuid::new_v4());

        // The plaintext code is the whole point of the mock: operators
        // read it out of the logs during development.
        tracing::info!(
            provider = "mock",
            email = %mask_email(email),
            code = %code,
            message_id = %message_id,
            send_number = count,
            "Verification code (mock delivery)"
        );

        Ok(message_id)
    }
}
