//! Transactional email integrations for verification codes

pub mod mock;
pub mod resend;

pub use mock::MockMailer;
pub use resend::{ResendConfig, ResendMailer};

use async_trait::async_trait;

use lh_core::services::verification::EmailNotifierTrait;
use lh_shared::config::EmailConfig;

use crate::InfrastructureError;

/// Notifier selected from configuration at startup.
///
/// With an API key the Resend mailer delivers for real; without one the
/// mock logs each code so the flow stays usable in development.
pub enum EmailNotifier {
    Resend(ResendMailer),
    Mock(MockMailer),
}

impl EmailNotifier {
    /// Build the notifier matching the configuration
    pub fn from_config(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        if config.is_configured() {
            Ok(Self::Resend(ResendMailer::new(ResendConfig::from(config))?))
        } else {
            tracing::warn!("RESEND_API_KEY not set; falling back to the mock mailer");
            Ok(Self::Mock(MockMailer::new()))
        }
    }
}

#[async_trait]
impl EmailNotifierTrait for EmailNotifier {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        match self {
            Self::Resend(mailer) => mailer.send_verification_code(email, code).await,
            Self::Mock(mailer) => mailer.send_verification_code(email, code).await,
        }
    }
}
