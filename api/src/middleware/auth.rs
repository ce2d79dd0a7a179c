//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the Authorization header, verifies it
//! through the core token service, and injects an [`AuthContext`] into
//! the request for handlers to extract. Failures short-circuit with a
//! 401 carrying the usual `{message}` body.

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use lh_core::domain::entities::token::Claims;
use lh_core::services::token::TokenService;
use lh_shared::types::response::ErrorResponse;

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from JWT claims
    pub user_id: Uuid,
    /// Email address carried in the claims
    pub email: String,
}

impl AuthContext {
    /// Creates an authentication context from verified JWT claims
    fn from_claims(claims: &Claims) -> Option<Self> {
        Some(Self {
            user_id: claims.user_id().ok()?,
            email: claims.email.clone(),
        })
    }
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthContext>()
                .cloned()
                .ok_or_else(|| ErrorUnauthorized("Authentication required")),
        )
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware backed by the given
    /// token service
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S> JwtAuthMiddleware<S> {
    fn unauthorized<B>(req: ServiceRequest, message: &str) -> ServiceResponse<EitherBody<B>> {
        let response = HttpResponse::Unauthorized()
            .json(ErrorResponse::new(message))
            .map_into_right_body();
        req.into_response(response)
    }
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .and_then(|h| h.strip_prefix("Bearer "))
                .map(str::to_owned);

            let token = match token {
                Some(token) => token,
                None => {
                    return Ok(Self::unauthorized(req, "Missing authorization header"));
                }
            };

            let claims = match token_service.verify_token(&token) {
                Ok(claims) => claims,
                Err(error) => {
                    return Ok(Self::unauthorized(req, &error.to_string()));
                }
            };

            let context = match AuthContext::from_claims(&claims) {
                Some(context) => context,
                None => return Ok(Self::unauthorized(req, "Invalid token")),
            };

            req.extensions_mut().insert(context);
            service.call(req).await.map(|res| res.map_into_left_body())
        })
    }
}
