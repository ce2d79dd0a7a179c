//! Trait for transactional email integration

use async_trait::async_trait;

/// Trait for the transactional email sender that delivers codes.
///
/// Implementations live in the infrastructure layer. Errors are plain
/// strings: the issuance path logs them and never propagates them.
#[async_trait]
pub trait EmailNotifierTrait: Send + Sync {
    /// Send a verification code to an email address
    ///
    /// # Returns
    /// The provider's message id on success.
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String>;
}
