//! User repository trait defining the interface for account persistence.
//!
//! This trait is the abstraction boundary between the domain and the
//! infrastructure layer; implementations handle the actual database
//! operations. Lookups are always keyed on the normalized email; callers
//! are responsible for normalizing before calling in.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their normalized email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that email
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Create a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate email)
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Check if a user exists with the given normalized email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
