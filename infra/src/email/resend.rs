//! Resend transactional email service implementation
//!
//! Implements the core `EmailNotifierTrait` against the Resend HTTP API.
//! Without an API key the mailer stays constructible and every send
//! returns an error, which the issuance path logs and swallows. Code
//! issuance never depends on delivery.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use lh_core::services::verification::EmailNotifierTrait;
use lh_shared::config::EmailConfig;
use lh_shared::utils::email::mask_email;

use crate::InfrastructureError;

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Resend mailer configuration
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// Resend API key; `None` disables delivery
    pub api_key: Option<String>,
    /// From address for outgoing mail
    pub from_address: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl From<&EmailConfig> for ResendConfig {
    fn from(config: &EmailConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
            request_timeout_secs: config.request_timeout_secs,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
}

/// Resend email service implementation
pub struct ResendMailer {
    client: reqwest::Client,
    config: ResendConfig,
}

impl ResendMailer {
    /// Create a new Resend mailer
    pub fn new(config: ResendConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(InfrastructureError::Http)?;

        if config.api_key.is_none() {
            tracing::warn!(
                "RESEND_API_KEY not set; verification emails will not be delivered"
            );
        }

        Ok(Self { client, config })
    }

    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<String, String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| "email provider not configured".to_string())?;

        let body = json!({
            "from": self.config.from_address,
            "to": [to],
            "subject": subject,
            "html": html,
        });

        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(format!("provider returned {}: {}", status, detail));
        }

        let parsed: SendResponse = response
            .json()
            .await
            .map_err(|e| format!("invalid provider response: {}", e))?;

        tracing::debug!(
            email = %mask_email(to),
            message_id = %parsed.id,
            "Email accepted by provider"
        );

        Ok(parsed.id)
    }
}

#[async_trait]
impl EmailNotifierTrait for ResendMailer {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        let subject = "Your LearnHub verification code";
        let html = format!(
            "<p>Your LearnHub verification code is:</p>\
             <p style=\"font-size:24px;font-weight:bold;letter-spacing:4px\">{}</p>\
             <p>The code expires in 15 minutes. If you did not request it, you can ignore this email.</p>",
            code
        );

        self.send(email, subject, &html).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured() -> ResendMailer {
        ResendMailer::new(ResendConfig {
            api_key: None,
            from_address: "LearnHub <noreply@learnhub.app>".to_string(),
            request_timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_unconfigured_mailer_fails_without_network() {
        let mailer = unconfigured();

        let result = mailer
            .send_verification_code("user@example.com", "123456")
            .await;

        assert_eq!(result, Err("email provider not configured".to_string()));
    }

    #[test]
    fn test_config_from_shared() {
        let shared = EmailConfig {
            api_key: Some("re_123".to_string()),
            from_address: "LearnHub <noreply@learnhub.app>".to_string(),
            request_timeout_secs: 7,
        };

        let config = ResendConfig::from(&shared);
        assert_eq!(config.api_key.as_deref(), Some("re_123"));
        assert_eq!(config.request_timeout_secs, 7);
    }
}
