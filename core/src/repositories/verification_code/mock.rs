//! Mock implementation of VerificationCodeRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::verification_code::{CodePurpose, VerificationCode};
use crate::errors::DomainError;

use super::trait_::VerificationCodeRepository;

/// In-memory verification code repository for tests
pub struct MockVerificationCodeRepository {
    codes: Arc<RwLock<Vec<VerificationCode>>>,
}

impl MockVerificationCodeRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            codes: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of stored records, for test assertions
    pub async fn len(&self) -> usize {
        self.codes.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.codes.read().await.is_empty()
    }
}

impl Default for MockVerificationCodeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationCodeRepository for MockVerificationCodeRepository {
    async fn insert(&self, code: VerificationCode) -> Result<VerificationCode, DomainError> {
        let mut codes = self.codes.write().await;
        codes.push(code.clone());
        Ok(code)
    }

    async fn find_current(
        &self,
        email: &str,
        purpose: CodePurpose,
    ) -> Result<Option<VerificationCode>, DomainError> {
        let codes = self.codes.read().await;
        Ok(codes
            .iter()
            .filter(|c| c.email == email && c.purpose == purpose)
            .max_by_key(|c| c.created_at)
            .cloned())
    }

    async fn record_failed_attempt(&self, id: Uuid) -> Result<(), DomainError> {
        let mut codes = self.codes.write().await;
        if let Some(code) = codes.iter_mut().find(|c| c.id == id) {
            code.attempt_count += 1;
        }
        Ok(())
    }

    async fn consume(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut codes = self.codes.write().await;
        match codes.iter_mut().find(|c| c.id == id && !c.used) {
            Some(code) => {
                code.used = true;
                code.used_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_for_email(
        &self,
        email: &str,
        purpose: CodePurpose,
    ) -> Result<u64, DomainError> {
        let mut codes = self.codes.write().await;
        let before = codes.len();
        codes.retain(|c| !(c.email == email && c.purpose == purpose));
        Ok((before - codes.len()) as u64)
    }
}
