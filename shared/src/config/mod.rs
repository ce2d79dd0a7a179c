//! Configuration modules for the LearnHub backend.
//!
//! Each struct is built once at startup (usually via `from_env`) and then
//! injected into the services that need it. Business logic never reads
//! process environment directly.

pub mod auth;
pub mod database;
pub mod email;
pub mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use server::ServerConfig;
