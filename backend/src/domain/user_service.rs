//! User domain service.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{UserRepository, UserRepositoryError, UsersCommand, UsersQuery};
use crate::domain::{Error, NewUser, RecordId, User, UserPatch, UserUpdate};

/// Message returned when an identifier matches no user.
pub const USER_NOT_FOUND: &str = "User not found.";

/// User service implementing [`UsersQuery`] and [`UsersCommand`].
#[derive(Clone)]
pub struct UserService<R> {
    repository: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    fn map_repository_error(error: UserRepositoryError) -> Error {
        match error {
            UserRepositoryError::Unavailable { message } => {
                Error::internal(format!("user repository unavailable: {message}"))
            }
        }
    }

    fn user_not_found(id: RecordId) -> Error {
        Error::not_found(USER_NOT_FOUND).with_details(json!({ "id": id }))
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .list()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn get_user(&self, id: RecordId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Self::user_not_found(id))
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, user: NewUser) -> Result<User, Error> {
        let created = self
            .repository
            .insert(user)
            .await
            .map_err(Self::map_repository_error)?;
        info!(user_id = %created.id(), "user created");
        Ok(created)
    }

    async fn update_user(&self, id: RecordId, patch: UserPatch) -> Result<UserUpdate, Error> {
        let update = self
            .repository
            .update(id, patch)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Self::user_not_found(id))?;
        info!(user_id = %id, changed = update.changes.len(), "user updated");
        Ok(update)
    }

    async fn delete_user(&self, id: RecordId) -> Result<User, Error> {
        let removed = self
            .repository
            .remove(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Self::user_not_found(id))?;
        info!(user_id = %id, "user deleted");
        Ok(removed)
    }
}
