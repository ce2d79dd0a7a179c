//! End-to-end tests for the authentication HTTP surface, running the
//! full app against in-memory repositories.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};
use async_trait::async_trait;
use serde_json::{json, Value};

use lh_api::app::create_app;
use lh_api::routes::AppState;
use lh_core::domain::entities::verification_code::CodePurpose;
use lh_core::repositories::{
    MockUserRepository, MockVerificationCodeRepository, VerificationCodeRepository,
};
use lh_core::services::auth::AuthService;
use lh_core::services::token::{TokenService, TokenServiceConfig};
use lh_core::services::verification::{
    EmailNotifierTrait, VerificationService, VerificationServiceConfig,
};

struct NoopNotifier;

#[async_trait]
impl EmailNotifierTrait for NoopNotifier {
    async fn send_verification_code(&self, _email: &str, _code: &str) -> Result<String, String> {
        Ok("noop".to_string())
    }
}

type TestState = AppState<MockUserRepository, NoopNotifier, MockVerificationCodeRepository>;

fn test_state() -> (web::Data<TestState>, Arc<MockVerificationCodeRepository>) {
    let users = Arc::new(MockUserRepository::new());
    let codes = Arc::new(MockVerificationCodeRepository::new());
    let verification_service = Arc::new(VerificationService::new(
        Arc::new(NoopNotifier),
        Arc::clone(&codes),
        VerificationServiceConfig::default(),
    ));
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::new(
        "test-secret".to_string(),
    )));
    let auth_service = Arc::new(AuthService::new(
        users,
        verification_service,
        Arc::clone(&token_service),
    ));

    (
        web::Data::new(AppState {
            auth_service,
            token_service,
        }),
        codes,
    )
}

/// Read the plaintext of the most recently issued code out of the store
async fn stored_code(codes: &MockVerificationCodeRepository, email: &str) -> String {
    codes
        .find_current(email, CodePurpose::EmailVerification)
        .await
        .unwrap()
        .expect("a code should have been issued")
        .code
}

#[actix_rt::test]
async fn test_health_endpoint() {
    let (state, _codes) = test_state();
    let app = test::init_service(create_app(state)).await;

    let request = test::TestRequest::get().uri("/health").to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_send_code_requires_email() {
    let (state, _codes) = test_state();
    let app = test::init_service(create_app(state)).await;

    let request = test::TestRequest::post()
        .uri("/api/auth/send-code")
        .set_json(json!({"email": ""}))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Email is required");
}

#[actix_rt::test]
async fn test_send_code_succeeds() {
    let (state, codes) = test_state();
    let app = test::init_service(create_app(state)).await;

    let request = test::TestRequest::post()
        .uri("/api/auth/send-code")
        .set_json(json!({"email": "user@example.com"}))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Verification code sent");
    assert_eq!(codes.len().await, 1);
}

#[actix_rt::test]
async fn test_register_with_code_and_login() {
    let (state, codes) = test_state();
    let app = test::init_service(create_app(state)).await;

    // Request a code
    let request = test::TestRequest::post()
        .uri("/api/auth/send-code")
        .set_json(json!({"email": "al@example.com"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, request).await.status(),
        StatusCode::OK
    );

    let code = stored_code(&codes, "al@example.com").await;

    // Register with the code; boundary-length name is accepted
    let request = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "name": "Al",
            "email": "al@example.com",
            "password": "password123",
            "code": code,
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = test::read_body_json(response).await;
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["email"], "al@example.com");
    assert_eq!(body["user"]["is_verified"], true);
    assert!(body["user"].get("password_hash").is_none());

    // Log in with the new credentials
    let request = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"email": "al@example.com", "password": "password123"}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Wrong password fails uniformly
    let request = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"email": "al@example.com", "password": "wrong-password"}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Invalid email or password");
}

#[actix_rt::test]
async fn test_register_without_code_then_verify() {
    let (state, codes) = test_state();
    let app = test::init_service(create_app(state)).await;

    // Register unverified
    let request = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "name": "Alice",
            "email": "alice@example.com",
            "password": "password123",
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["user"]["is_verified"], false);

    // Verify separately
    let request = test::TestRequest::post()
        .uri("/api/auth/send-code")
        .set_json(json!({"email": "alice@example.com"}))
        .to_request();
    test::call_service(&app, request).await;
    let code = stored_code(&codes, "alice@example.com").await;

    let request = test::TestRequest::post()
        .uri("/api/auth/verify")
        .set_json(json!({"email": "alice@example.com", "code": code}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["user"]["is_verified"], true);

    // Replaying the purged code fails
    let request = test::TestRequest::post()
        .uri("/api/auth/verify")
        .set_json(json!({"email": "alice@example.com", "code": "123456"}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Invalid verification code");
}

#[actix_rt::test]
async fn test_register_validation_messages() {
    let (state, _codes) = test_state();
    let app = test::init_service(create_app(state)).await;

    let request = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "name": "A",
            "email": "a@example.com",
            "password": "password123",
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Name must be at least 2 characters long");
}

#[actix_rt::test]
async fn test_register_duplicate_email() {
    let (state, _codes) = test_state();
    let app = test::init_service(create_app(state)).await;

    let payload = json!({
        "name": "Alice",
        "email": "alice@example.com",
        "password": "password123",
    });

    let request = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(payload.clone())
        .to_request();
    assert_eq!(
        test::call_service(&app, request).await.status(),
        StatusCode::OK
    );

    let request = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(payload)
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Email already registered");
}

#[actix_rt::test]
async fn test_me_requires_valid_token() {
    let (state, _codes) = test_state();
    let app = test::init_service(create_app(state)).await;

    // No token
    let request = test::TestRequest::get().uri("/api/auth/me").to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Garbage token
    let request = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", "Bearer not-a-token"))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_me_returns_profile() {
    let (state, _codes) = test_state();
    let app = test::init_service(create_app(state)).await;

    let request = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "name": "Alice",
            "email": "alice@example.com",
            "password": "password123",
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    let token = body["token"].as_str().unwrap().to_string();

    let request = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["user"]["email"], "alice@example.com");
}
