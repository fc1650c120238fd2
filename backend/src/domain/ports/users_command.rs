//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, RecordId, User, UserPatch, UserUpdate};

/// Write-side user use-cases.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Store a new user and return it with its assigned identifier.
    async fn create_user(&self, user: NewUser) -> Result<User, Error>;

    /// Overwrite the supplied name and/or password of an existing user.
    async fn update_user(&self, id: RecordId, patch: UserPatch) -> Result<UserUpdate, Error>;

    /// Remove a user and return it.
    async fn delete_user(&self, id: RecordId) -> Result<User, Error>;
}
