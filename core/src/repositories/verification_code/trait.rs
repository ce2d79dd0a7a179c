//! Verification code repository trait.
//!
//! Codes are keyed on the (normalized email, purpose) pair. Issuance and
//! the post-consumption purge both delete on that pair, so at most one
//! record per pair exists in steady state. The store does not enforce
//! this as a uniqueness constraint.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::verification_code::{CodePurpose, VerificationCode};
use crate::errors::DomainError;

/// Repository trait for VerificationCode persistence operations
#[async_trait]
pub trait VerificationCodeRepository: Send + Sync {
    /// Persist a freshly issued code
    async fn insert(&self, code: VerificationCode) -> Result<VerificationCode, DomainError>;

    /// Find the current (most recently issued) code for an (email, purpose)
    /// pair, regardless of its lifecycle state
    async fn find_current(
        &self,
        email: &str,
        purpose: CodePurpose,
    ) -> Result<Option<VerificationCode>, DomainError>;

    /// Increment the failed-attempt counter on a code record
    async fn record_failed_attempt(&self, id: Uuid) -> Result<(), DomainError>;

    /// Conditionally mark a code as used
    ///
    /// The update is guarded on `used = false` so two concurrent
    /// consumers cannot both succeed.
    ///
    /// # Returns
    /// * `Ok(true)` - This caller consumed the code
    /// * `Ok(false)` - The code was already used
    async fn consume(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Delete every code for an (email, purpose) pair
    ///
    /// # Returns
    /// The number of records removed.
    async fn delete_for_email(
        &self,
        email: &str,
        purpose: CodePurpose,
    ) -> Result<u64, DomainError>;
}
