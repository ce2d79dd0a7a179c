//! CORS configuration for the SPA frontend

use actix_cors::Cors;
use actix_web::http::header;

/// Create the CORS middleware.
///
/// Development defaults: the SPA dev server origin plus localhost, with
/// credentials enabled so the bearer token can travel in headers.
pub fn create_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:5173")
        .allowed_origin("http://localhost:3000")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(3600)
}
