//! User entity representing a registered account in the LearnHub system.

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// OAuth identity providers a user account can be linked to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    Google,
    Github,
}

/// User entity representing a registered account
///
/// The password hash is write-only: it is skipped during serialization so
/// it can never leak through a response body, and all hashing/comparison
/// happens on the entity itself. Orchestration code never sees password
/// material beyond the plaintext it forwards here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Normalized (lowercased, trimmed) email address, unique per account
    pub email: String,

    /// Display name
    pub name: String,

    /// Bcrypt password hash; `None` for OAuth-only or partial accounts
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,

    /// Whether the email address has been verified
    pub is_verified: bool,

    /// OAuth providers linked to this account
    pub oauth_providers: Vec<OAuthProvider>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,

    /// Timestamp of the user's last login
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a new unverified, passwordless user
    pub fn new(email: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password_hash: None,
            is_verified: false,
            oauth_providers: Vec::new(),
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Hashes and stores a new password
    pub fn set_password(&mut self, plaintext: &str) -> Result<(), DomainError> {
        let hashed = hash(plaintext, DEFAULT_COST).map_err(|e| DomainError::Internal {
            message: format!("Failed to hash password: {}", e),
        })?;
        self.password_hash = Some(hashed);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Compares a plaintext password against the stored hash
    ///
    /// Returns `false` when no password is set or the hash is malformed.
    pub fn verify_password(&self, plaintext: &str) -> bool {
        match &self.password_hash {
            Some(hashed) => verify(plaintext, hashed).unwrap_or(false),
            None => false,
        }
    }

    /// Whether a password has been set on this account
    pub fn has_password(&self) -> bool {
        self.password_hash.is_some()
    }

    /// Updates the display name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Marks the user's email as verified
    pub fn mark_verified(&mut self) {
        self.is_verified = true;
        self.updated_at = Utc::now();
    }

    /// Updates the last login timestamp
    pub fn update_last_login(&mut self) {
        self.last_login_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_creation() {
        let user = User::new("user@example.com".to_string(), "Alice".to_string());

        assert_eq!(user.email, "user@example.com");
        assert_eq!(user.name, "Alice");
        assert!(!user.is_verified);
        assert!(!user.has_password());
        assert!(user.oauth_providers.is_empty());
        assert!(user.last_login_at.is_none());
    }

    #[test]
    fn test_password_round_trip() {
        let mut user = User::new("user@example.com".to_string(), "Alice".to_string());

        user.set_password("correct horse").unwrap();
        assert!(user.has_password());
        assert_ne!(user.password_hash.as_deref(), Some("correct horse"));
        assert!(user.verify_password("correct horse"));
        assert!(!user.verify_password("wrong battery"));
    }

    #[test]
    fn test_verify_password_without_hash() {
        let user = User::new("user@example.com".to_string(), "Alice".to_string());
        assert!(!user.verify_password("anything"));
    }

    #[test]
    fn test_mark_verified() {
        let mut user = User::new("user@example.com".to_string(), "Alice".to_string());

        assert!(!user.is_verified);
        user.mark_verified();
        assert!(user.is_verified);
    }

    #[test]
    fn test_update_last_login() {
        let mut user = User::new("user@example.com".to_string(), "Alice".to_string());

        assert!(user.last_login_at.is_none());
        user.update_last_login();
        assert!(user.last_login_at.is_some());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let mut user = User::new("user@example.com".to_string(), "Alice".to_string());
        user.set_password("correct horse").unwrap();

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "user@example.com");
    }

    #[test]
    fn test_oauth_provider_serialization() {
        let json = serde_json::to_string(&OAuthProvider::Google).unwrap();
        assert_eq!(json, "\"google\"");
        let json = serde_json::to_string(&OAuthProvider::Github).unwrap();
        assert_eq!(json, "\"github\"");
    }
}
