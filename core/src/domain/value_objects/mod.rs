//! Value objects shared across services and the API layer.

pub mod auth_response;

pub use auth_response::{AuthResponse, UserProfile};
