use async_trait::async_trait;

use concierge_core::AppResult;
use concierge_domain::{User, UserId};

/// Read-only port onto the user directory.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Finds a user by identifier.
    async fn find_user(&self, user_id: &UserId) -> AppResult<Option<User>>;
}
