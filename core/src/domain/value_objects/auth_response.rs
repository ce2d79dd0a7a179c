//! Authentication response value objects for API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::{OAuthProvider, User};

/// Public view of a user account
///
/// Built from the entity by field selection, so password material cannot
/// appear here by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_verified: bool,
    pub oauth_providers: Vec<OAuthProvider>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            is_verified: user.is_verified,
            oauth_providers: user.oauth_providers.clone(),
            created_at: user.created_at,
        }
    }
}

/// Response returned after successful authentication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed session token
    pub token: String,

    /// Public profile of the authenticated user
    pub user: UserProfile,
}

impl AuthResponse {
    /// Creates an authentication response from a token and a user entity
    pub fn new(token: String, user: &User) -> Self {
        Self {
            token,
            user: UserProfile::from(user),
        }
    }
}
