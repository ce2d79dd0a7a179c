//! # Infrastructure Layer
//!
//! Concrete implementations of the `lh_core` abstractions:
//! - **Database**: MySQL repositories using SQLx
//! - **Email**: transactional email delivery for verification codes

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Email module - transactional email delivery
pub mod email;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email delivery error
    #[error("Email service error: {0}")]
    Email(String),
}
