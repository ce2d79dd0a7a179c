//! Mock notifier for verification service tests

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::services::verification::traits::EmailNotifierTrait;

/// Mock email notifier that records sends and can be told to fail
pub struct MockEmailNotifier {
    pub sent: Arc<RwLock<Vec<(String, String)>>>,
    fail: bool,
}

impl MockEmailNotifier {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            fail: false,
        }
    }

    /// A notifier whose every send fails
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            fail: true,
        }
    }
}

#[async_trait]
impl EmailNotifierTrait for MockEmailNotifier {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        if self.fail {
            return Err("notifier unavailable".to_string());
        }
        self.sent
            .write()
            .await
            .push((email.to_string(), code.to_string()));
        Ok(format!("mock-{}", self.sent.read().await.len()))
    }
}
