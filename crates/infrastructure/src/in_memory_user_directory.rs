use std::collections::HashMap;

use async_trait::async_trait;
use concierge_application::UserDirectory;
use concierge_core::AppResult;
use concierge_domain::{User, UserId};
use tokio::sync::RwLock;

/// In-memory user directory seeded at construction.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserDirectory {
    /// Creates a directory holding the given users.
    #[must_use]
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: RwLock::new(
                users
                    .into_iter()
                    .map(|user| (user.id().clone(), user))
                    .collect(),
            ),
        }
    }

    /// Returns the number of known users.
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_user(&self, user_id: &UserId) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use concierge_application::UserDirectory;
    use concierge_domain::{User, UserId, UserStatus};

    use super::InMemoryUserDirectory;

    #[tokio::test]
    async fn finds_seeded_user_only() {
        let directory = InMemoryUserDirectory::new([User::new(
            "U-1234",
            "Maria Lopez",
            "maria.lopez@example.com",
            UserStatus::Inactive,
            Some("business_unit_admin".to_owned()),
        )
        .unwrap_or_else(|_| unreachable!())]);

        let known = directory
            .find_user(&UserId::new("U-1234").unwrap_or_else(|_| unreachable!()))
            .await
            .unwrap_or_default();
        let unknown = directory
            .find_user(&UserId::new("U-9999").unwrap_or_else(|_| unreachable!()))
            .await
            .unwrap_or_default();

        assert_eq!(known.map(|user| user.status()), Some(UserStatus::Inactive));
        assert!(unknown.is_none());
        assert_eq!(directory.user_count().await, 1);
    }
}
