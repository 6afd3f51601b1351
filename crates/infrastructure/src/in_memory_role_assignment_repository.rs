use std::collections::HashMap;

use async_trait::async_trait;
use concierge_application::{RoleAssignment, RoleAssignmentRepository};
use concierge_core::AppResult;
use concierge_domain::{BusinessUnitId, UserId};
use tokio::sync::RwLock;

/// In-memory role assignment repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryRoleAssignmentRepository {
    assignments: RwLock<HashMap<(BusinessUnitId, UserId), RoleAssignment>>,
}

impl InMemoryRoleAssignmentRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleAssignmentRepository for InMemoryRoleAssignmentRepository {
    async fn find_assignment(
        &self,
        business_unit_id: &BusinessUnitId,
        user_id: &UserId,
    ) -> AppResult<Option<RoleAssignment>> {
        Ok(self
            .assignments
            .read()
            .await
            .get(&(business_unit_id.clone(), user_id.clone()))
            .cloned())
    }

    async fn save_assignment(&self, assignment: RoleAssignment) -> AppResult<()> {
        self.assignments.write().await.insert(
            (
                assignment.business_unit_id.clone(),
                assignment.user_id.clone(),
            ),
            assignment,
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use concierge_application::{RoleAssignment, RoleAssignmentRepository};
    use concierge_domain::{BusinessUnitId, RoleSet, SystemId, UserId};

    use super::InMemoryRoleAssignmentRepository;

    fn assignment(business_unit_id: &str, user_id: &str, roles: &[&str]) -> RoleAssignment {
        RoleAssignment {
            business_unit_id: BusinessUnitId::new(business_unit_id)
                .unwrap_or_else(|_| unreachable!()),
            user_id: UserId::new(user_id).unwrap_or_else(|_| unreachable!()),
            roles: RoleSet::from_names(roles.iter().copied()).unwrap_or_else(|_| unreachable!()),
            last_updated: Utc::now(),
            updated_by: SystemId::new("supply-chain-system").unwrap_or_else(|_| unreachable!()),
        }
    }

    #[tokio::test]
    async fn missing_pair_returns_none() {
        let repository = InMemoryRoleAssignmentRepository::new();
        let business_unit_id = BusinessUnitId::new("BU-1").unwrap_or_else(|_| unreachable!());
        let user_id = UserId::new("U-1").unwrap_or_else(|_| unreachable!());

        let found = repository.find_assignment(&business_unit_id, &user_id).await;

        assert!(matches!(found, Ok(None)));
    }

    #[tokio::test]
    async fn save_replaces_existing_pair() {
        let repository = InMemoryRoleAssignmentRepository::new();
        assert!(
            repository
                .save_assignment(assignment("BU-1", "U-1", &["manager"]))
                .await
                .is_ok()
        );
        assert!(
            repository
                .save_assignment(assignment("BU-1", "U-1", &["staff"]))
                .await
                .is_ok()
        );

        let stored = repository
            .find_assignment(
                &BusinessUnitId::new("BU-1").unwrap_or_else(|_| unreachable!()),
                &UserId::new("U-1").unwrap_or_else(|_| unreachable!()),
            )
            .await
            .unwrap_or_default();

        assert_eq!(
            stored.map(|assignment| assignment.roles.to_names()),
            Some(vec!["staff".to_owned()])
        );
    }

    #[tokio::test]
    async fn assignments_do_not_leak_across_business_units() {
        let repository = InMemoryRoleAssignmentRepository::new();
        assert!(
            repository
                .save_assignment(assignment("BU-1", "U-1", &["manager"]))
                .await
                .is_ok()
        );

        let other_unit = repository
            .find_assignment(
                &BusinessUnitId::new("BU-2").unwrap_or_else(|_| unreachable!()),
                &UserId::new("U-1").unwrap_or_else(|_| unreachable!()),
            )
            .await;

        assert!(matches!(other_unit, Ok(None)));
    }
}
