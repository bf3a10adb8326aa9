// User Repository Port (Interface)

use crate::domain::{User, UserId};
use crate::error::Result;
use async_trait::async_trait;

/// Read-only finders over `users`
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>>;

    /// Find user by (fname, lname); first row in storage order if several match
    async fn find_user_by_name(&self, fname: &str, lname: &str) -> Result<Option<User>>;

    /// Find every user whose ID is in `ids`, storage order
    ///
    /// Adapters may split a long `ids` list over several queries; order is
    /// then storage order within each batch. Unknown IDs are skipped. An empty slice returns an empty `Vec`.
    async fn find_users_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>>;
}
