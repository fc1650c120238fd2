//! In-memory adapter for [`UserRepository`].

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{NewUser, RecordId, User, UserPatch, UserUpdate};

use super::collection::RecordCollection;

/// User store held in process memory.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    collection: RwLock<RecordCollection<User>>,
}

impl InMemoryUserRepository {
    /// Create a repository holding `users` in their given order.
    pub fn new(users: Vec<User>) -> Self {
        Self {
            collection: RwLock::new(RecordCollection::new(users)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self.collection.read().await.records().to_vec())
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.collection.read().await.get(id).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let mut collection = self.collection.write().await;
        Ok(collection.push_with(|id| user.with_id(id)))
    }

    async fn update(
        &self,
        id: RecordId,
        patch: UserPatch,
    ) -> Result<Option<UserUpdate>, UserRepositoryError> {
        let mut collection = self.collection.write().await;
        Ok(collection.get_mut(id).map(|user| {
            let changes = user.apply(patch);
            UserUpdate {
                user: user.clone(),
                changes,
            }
        }))
    }

    async fn remove(&self, id: RecordId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.collection.write().await.remove(id))
    }
}
