//! Application factory
//!
//! Builds the Actix-web application with all middleware and routes
//! around an injected [`AppState`].

use std::sync::Arc;

use actix_web::{body::MessageBody, middleware::Logger, web, App, HttpResponse};

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::auth::{
    login::login, me::me, register::register, send_code::send_code, verify::verify, AppState,
};

use lh_core::repositories::{UserRepository, VerificationCodeRepository};
use lh_core::services::verification::EmailNotifierTrait;
use lh_shared::types::response::ErrorResponse;

/// Create and configure the application with all dependencies
pub fn create_app<U, N, V>(
    app_state: web::Data<AppState<U, N, V>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    N: EmailNotifierTrait + 'static,
    V: VerificationCodeRepository + 'static,
{
    let cors = create_cors();
    let jwt_auth = JwtAuth::new(Arc::clone(&app_state.token_service));

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API routes
        .service(
            web::scope("/api").service(
                web::scope("/auth")
                    .route("/send-code", web::post().to(send_code::<U, N, V>))
                    .route("/verify", web::post().to(verify::<U, N, V>))
                    .route("/register", web::post().to(register::<U, N, V>))
                    .route("/login", web::post().to(login::<U, N, V>))
                    .route("/me", web::get().to(me::<U, N, V>).wrap(jwt_auth)),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "learnhub-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("The requested resource was not found"))
}
