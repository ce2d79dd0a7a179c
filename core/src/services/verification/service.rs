//! Main verification service implementation

use std::sync::Arc;

use lh_shared::utils::email::{is_valid_email, mask_email, normalize_email};

use crate::domain::entities::verification_code::{CodePurpose, CodeStatus, VerificationCode};
use crate::errors::{DomainResult, ValidationError};
use crate::repositories::VerificationCodeRepository;

use super::config::VerificationServiceConfig;
use super::traits::EmailNotifierTrait;
use super::types::{CodeRejection, VerifyCodeResult};

/// Verification service for handling email verification codes
pub struct VerificationService<N: EmailNotifierTrait, V: VerificationCodeRepository> {
    /// Transactional email sender
    notifier: Arc<N>,
    /// Code persistence
    code_repository: Arc<V>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<N, V> VerificationService<N, V>
where
    N: EmailNotifierTrait + 'static,
    V: VerificationCodeRepository,
{
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `notifier` - Email sender implementation
    /// * `code_repository` - Code persistence implementation
    /// * `config` - Service configuration
    pub fn new(
        notifier: Arc<N>,
        code_repository: Arc<V>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            notifier,
            code_repository,
            config,
        }
    }

    /// Issue a verification code for an email address
    ///
    /// This method:
    /// 1. Normalizes and validates the email address
    /// 2. Deletes every prior code for the (email, purpose) pair
    /// 3. Generates and persists a fresh 6-digit code
    /// 4. Dispatches the notification as a detached task (best effort)
    ///
    /// The delete-then-insert pair is not transactional; two racing
    /// issuances can interleave, which the purge after a successful
    /// verification bounds.
    ///
    /// # Returns
    ///
    /// * `Ok(VerificationCode)` - The persisted record, including the
    ///   plaintext code
    /// * `Err(DomainError)` - Validation or store failure
    pub async fn issue_code(
        &self,
        email: &str,
        purpose: CodePurpose,
    ) -> DomainResult<VerificationCode> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        // Invalidate all previous codes so only the newest one can match
        let removed = self
            .code_repository
            .delete_for_email(&email, purpose)
            .await?;
        if removed > 0 {
            tracing::debug!(
                email = %mask_email(&email),
                removed = removed,
                event = "codes_superseded",
                "Removed previous verification codes"
            );
        }

        let verification_code =
            VerificationCode::new(email.clone(), purpose, self.config.code_ttl_minutes);
        let verification_code = self.code_repository.insert(verification_code).await?;

        tracing::info!(
            email = %mask_email(&email),
            code_id = %verification_code.id,
            expires_at = %verification_code.expires_at,
            event = "code_issued",
            "Issued new verification code"
        );
        // Operator visibility when no notifier is configured
        tracing::debug!(code = %verification_code.code, "Verification code plaintext");

        self.dispatch_notification(&verification_code);

        Ok(verification_code)
    }

    /// Verify a submitted code for an email address
    ///
    /// Looks up the current record for the (email, purpose) pair and
    /// classifies it. A wrong code against an active record increments
    /// the attempt counter; the cap is enforced on the next submission.
    /// On a match the record is consumed with a conditional update and
    /// every code for the pair is purged.
    ///
    /// # Returns
    ///
    /// * `Ok(VerifyCodeResult)` - Outcome, including a rejection reason
    ///   on business-rule failure
    /// * `Err(DomainError)` - Store failure only
    pub async fn verify_code(
        &self,
        email: &str,
        submitted_code: &str,
        purpose: CodePurpose,
    ) -> DomainResult<VerifyCodeResult> {
        let email = normalize_email(email);

        let record = match self.code_repository.find_current(&email, purpose).await? {
            Some(record) => record,
            None => {
                tracing::warn!(
                    email = %mask_email(&email),
                    event = "code_not_found",
                    "Verification attempted with no issued code"
                );
                return Ok(VerifyCodeResult::rejected(CodeRejection::InvalidCode));
            }
        };

        match record.status() {
            CodeStatus::Consumed => {
                return Ok(VerifyCodeResult::rejected(CodeRejection::AlreadyUsed));
            }
            CodeStatus::AttemptsExhausted => {
                return Ok(VerifyCodeResult::rejected(CodeRejection::TooManyAttempts));
            }
            CodeStatus::Expired => {
                return Ok(VerifyCodeResult::rejected(CodeRejection::Expired));
            }
            CodeStatus::Active => {}
        }

        if !record.matches(submitted_code) {
            self.code_repository.record_failed_attempt(record.id).await?;
            tracing::warn!(
                email = %mask_email(&email),
                remaining = record.remaining_attempts() - 1,
                event = "code_mismatch",
                "Verification code mismatch"
            );
            return Ok(VerifyCodeResult::rejected(CodeRejection::InvalidCode));
        }

        // Conditional consume: a concurrent verifier that lost the race
        // observes the code as already used.
        if !self.code_repository.consume(record.id).await? {
            return Ok(VerifyCodeResult::rejected(CodeRejection::AlreadyUsed));
        }

        // Purge the consumed record together with any siblings a racing
        // issuance may have left behind.
        self.code_repository.delete_for_email(&email, purpose).await?;

        tracing::info!(
            email = %mask_email(&email),
            code_id = %record.id,
            event = "code_verified",
            "Verification code consumed"
        );

        Ok(VerifyCodeResult::ok())
    }

    /// Hand the code to the notifier without awaiting the send.
    ///
    /// Delivery latency and failures stay isolated from issuance; a
    /// failed send is logged and otherwise dropped.
    fn dispatch_notification(&self, verification_code: &VerificationCode) {
        let notifier = Arc::clone(&self.notifier);
        let email = verification_code.email.clone();
        let code = verification_code.code.clone();

        tokio::spawn(async move {
            match notifier.send_verification_code(&email, &code).await {
                Ok(message_id) => {
                    tracing::info!(
                        email = %mask_email(&email),
                        message_id = %message_id,
                        event = "code_email_sent",
                        "Verification code email dispatched"
                    );
                }
                Err(error) => {
                    tracing::warn!(
                        email = %mask_email(&email),
                        error = %error,
                        event = "code_email_failed",
                        "Failed to send verification code email"
                    );
                }
            }
        });
    }
}
