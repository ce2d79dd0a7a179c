use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use lh_api::app::create_app;
use lh_api::routes::AppState;
use lh_core::services::auth::AuthService;
use lh_core::services::token::{TokenService, TokenServiceConfig};
use lh_core::services::verification::{VerificationService, VerificationServiceConfig};
use lh_infra::database::{create_pool, MySqlUserRepository, MySqlVerificationCodeRepository};
use lh_infra::email::EmailNotifier;
use lh_shared::config::{AuthConfig, DatabaseConfig, EmailConfig, ServerConfig};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting LearnHub API server");

    // Load configuration
    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env().map_err(invalid_config)?;
    let auth_config = AuthConfig::from_env().map_err(invalid_config)?;
    let email_config = EmailConfig::from_env();

    // Infrastructure
    let pool = create_pool(&database_config)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let code_repository = Arc::new(MySqlVerificationCodeRepository::new(pool));
    let mailer = Arc::new(
        EmailNotifier::from_config(&email_config)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?,
    );

    // Services
    let verification_service = Arc::new(VerificationService::new(
        mailer,
        code_repository,
        VerificationServiceConfig {
            code_ttl_minutes: auth_config.code_ttl_minutes,
        },
    ));
    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: auth_config.jwt_secret.clone(),
        expiry_days: auth_config.token_expiry_days,
    }));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        verification_service,
        Arc::clone(&token_service),
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        token_service,
    });

    let bind_address = server_config.bind_address();
    tracing::info!(address = %bind_address, "Server binding");

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}

fn invalid_config(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}
