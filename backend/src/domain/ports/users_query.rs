//! Driving port for user queries.

use async_trait::async_trait;

use crate::domain::{Error, RecordId, User};

/// Read-side user use-cases.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every user in collection order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// One user by identifier, or a not-found error.
    async fn get_user(&self, id: RecordId) -> Result<User, Error>;
}
