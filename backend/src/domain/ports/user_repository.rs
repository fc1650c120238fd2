//! Driven port for user storage.

use async_trait::async_trait;

use crate::domain::{NewUser, RecordId, User, UserPatch, UserUpdate};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// The backing store could not serve the request.
        Unavailable { message: String } => "user store unavailable: {message}",
    }
}

/// Storage contract for users, with the same ordering and identifier
/// guarantees as [`super::RecipeRepository`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user in insertion order.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// The user with `id`, if stored.
    async fn find_by_id(&self, id: RecordId) -> Result<Option<User>, UserRepositoryError>;

    /// Store a user under a freshly allocated identifier.
    async fn insert(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    /// Apply `patch` to the user with `id`. `None` when no such user.
    async fn update(
        &self,
        id: RecordId,
        patch: UserPatch,
    ) -> Result<Option<UserUpdate>, UserRepositoryError>;

    /// Remove and return the user with `id`. `None` when no such user.
    async fn remove(&self, id: RecordId) -> Result<Option<User>, UserRepositoryError>;
}
