//! Behavioral tests for the verification code lifecycle

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::verification_code::{
    CodePurpose, VerificationCode, DEFAULT_TTL_MINUTES, MAX_ATTEMPTS,
};
use crate::errors::DomainError;
use crate::repositories::{MockVerificationCodeRepository, VerificationCodeRepository};
use crate::services::verification::{
    CodeRejection, VerificationService, VerificationServiceConfig,
};

use super::mocks::MockEmailNotifier;

const PURPOSE: CodePurpose = CodePurpose::EmailVerification;

fn service_with(
    notifier: MockEmailNotifier,
    config: VerificationServiceConfig,
) -> (
    VerificationService<MockEmailNotifier, MockVerificationCodeRepository>,
    Arc<MockVerificationCodeRepository>,
) {
    let repo = Arc::new(MockVerificationCodeRepository::new());
    let service = VerificationService::new(Arc::new(notifier), Arc::clone(&repo), config);
    (service, repo)
}

fn service() -> (
    VerificationService<MockEmailNotifier, MockVerificationCodeRepository>,
    Arc<MockVerificationCodeRepository>,
) {
    service_with(MockEmailNotifier::new(), VerificationServiceConfig::default())
}

#[tokio::test]
async fn test_issue_persists_code() {
    let (service, repo) = service();

    let issued = service.issue_code("user@example.com", PURPOSE).await.unwrap();

    assert_eq!(issued.email, "user@example.com");
    assert_eq!(repo.len().await, 1);
    assert!(!issued.used);
    assert_eq!(issued.attempt_count, 0);
}

#[tokio::test]
async fn test_issue_rejects_invalid_email() {
    let (service, repo) = service();

    let result = service.issue_code("not-an-email", PURPOSE).await;

    assert!(matches!(result, Err(DomainError::ValidationErr(_))));
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_issue_normalizes_email() {
    let (service, _repo) = service();

    let issued = service
        .issue_code("  User@Example.COM ", PURPOSE)
        .await
        .unwrap();
    assert_eq!(issued.email, "user@example.com");

    let result = service
        .verify_code("user@example.com", &issued.code, PURPOSE)
        .await
        .unwrap();
    assert!(result.success);
}

#[tokio::test]
async fn test_reissue_invalidates_previous_code() {
    let (service, repo) = service();

    let first = service.issue_code("user@example.com", PURPOSE).await.unwrap();
    let _second = service.issue_code("user@example.com", PURPOSE).await.unwrap();

    // Only the new record remains
    assert_eq!(repo.len().await, 1);

    let result = service
        .verify_code("user@example.com", &first.code, PURPOSE)
        .await
        .unwrap();
    assert!(!result.success);
    assert_eq!(result.message(), Some("Invalid verification code"));
}

#[tokio::test]
async fn test_notifier_failure_does_not_block_issuance() {
    let (service, repo) =
        service_with(MockEmailNotifier::failing(), VerificationServiceConfig::default());

    let result = service.issue_code("user@example.com", PURPOSE).await;

    assert!(result.is_ok());
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_notifier_receives_issued_code() {
    let notifier = MockEmailNotifier::new();
    let sent = Arc::clone(&notifier.sent);
    let (service, _repo) = service_with(notifier, VerificationServiceConfig::default());

    let issued = service.issue_code("user@example.com", PURPOSE).await.unwrap();

    // The send runs on a detached task; give it a moment to land.
    tokio::time::sleep(Duration::from_millis(20)).await;

    let sends = sent.read().await.clone();
    assert_eq!(sends, vec![("user@example.com".to_string(), issued.code)]);
}

#[tokio::test]
async fn test_verify_never_issued_code() {
    let (service, _repo) = service();

    let result = service
        .verify_code("user@example.com", "123456", PURPOSE)
        .await
        .unwrap();

    assert!(!result.success);
    assert_eq!(result.rejection, Some(CodeRejection::InvalidCode));
}

#[tokio::test]
async fn test_verify_success_purges_codes() {
    let (service, repo) = service();

    let issued = service.issue_code("user@example.com", PURPOSE).await.unwrap();

    let result = service
        .verify_code("user@example.com", &issued.code, PURPOSE)
        .await
        .unwrap();
    assert!(result.success);
    assert!(repo.is_empty().await);

    // The purged code cannot be replayed
    let replay = service
        .verify_code("user@example.com", &issued.code, PURPOSE)
        .await
        .unwrap();
    assert!(!replay.success);
    assert_eq!(replay.message(), Some("Invalid verification code"));
}

#[tokio::test]
async fn test_verify_expired_code() {
    let (service, _repo) = service_with(
        MockEmailNotifier::new(),
        VerificationServiceConfig { code_ttl_minutes: 0 },
    );

    let issued = service.issue_code("user@example.com", PURPOSE).await.unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;

    let result = service
        .verify_code("user@example.com", &issued.code, PURPOSE)
        .await
        .unwrap();

    assert!(!result.success);
    assert_eq!(result.message(), Some("Code expired"));
}

#[tokio::test]
async fn test_wrong_code_increments_attempts() {
    let (service, repo) = service();

    let issued = service.issue_code("user@example.com", PURPOSE).await.unwrap();
    let wrong = if issued.code == "654321" { "123456" } else { "654321" };

    let result = service
        .verify_code("user@example.com", wrong, PURPOSE)
        .await
        .unwrap();
    assert!(!result.success);
    assert_eq!(result.message(), Some("Invalid verification code"));

    let stored = repo
        .find_current("user@example.com", PURPOSE)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.attempt_count, 1);
}

#[tokio::test]
async fn test_attempts_exhaust_then_lock_out_correct_code() {
    let (service, _repo) = service();

    let issued = service.issue_code("user@example.com", PURPOSE).await.unwrap();
    let wrong = if issued.code == "654321" { "123456" } else { "654321" };

    for _ in 0..MAX_ATTEMPTS {
        let result = service
            .verify_code("user@example.com", wrong, PURPOSE)
            .await
            .unwrap();
        assert_eq!(result.message(), Some("Invalid verification code"));
    }

    // Even the correct code is rejected once attempts are exhausted
    let result = service
        .verify_code("user@example.com", &issued.code, PURPOSE)
        .await
        .unwrap();
    assert!(!result.success);
    assert_eq!(result.message(), Some("Too many failed attempts"));
}

#[tokio::test]
async fn test_verify_already_used_code() {
    let (service, repo) = service();

    // A consumed record that escaped the purge (e.g. a lost consume race)
    let mut record = VerificationCode::new(
        "user@example.com".to_string(),
        PURPOSE,
        DEFAULT_TTL_MINUTES,
    );
    record.consume();
    let code = record.code.clone();
    repo.insert(record).await.unwrap();

    let result = service
        .verify_code("user@example.com", &code, PURPOSE)
        .await
        .unwrap();

    assert!(!result.success);
    assert_eq!(result.message(), Some("Code already used"));
}

#[tokio::test]
async fn test_purposes_do_not_cross() {
    let (service, _repo) = service();

    let issued = service.issue_code("user@example.com", PURPOSE).await.unwrap();

    let result = service
        .verify_code("user@example.com", &issued.code, CodePurpose::PasswordReset)
        .await
        .unwrap();
    assert!(!result.success);
    assert_eq!(result.rejection, Some(CodeRejection::InvalidCode));
}
