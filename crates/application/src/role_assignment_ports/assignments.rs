use async_trait::async_trait;
use chrono::{DateTime, Utc};

use concierge_core::AppResult;
use concierge_domain::{BusinessUnitId, RoleSet, SystemId, UserId};

/// Stored role assignment for one business unit and user pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignment {
    /// Business unit scope.
    pub business_unit_id: BusinessUnitId,
    /// Assigned user.
    pub user_id: UserId,
    /// Current role set, possibly empty.
    pub roles: RoleSet,
    /// Timestamp of the most recent mutation.
    pub last_updated: DateTime<Utc>,
    /// Calling system that performed the most recent mutation.
    pub updated_by: SystemId,
}

/// Input payload for add, remove and sync operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleUpdateInput {
    /// Role names carried by the request.
    pub roles: Vec<String>,
    /// Calling system identifier.
    pub system_id: String,
}

/// Result returned by every successful role mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignmentResult {
    /// Assigned user.
    pub user_id: UserId,
    /// Business unit scope.
    pub business_unit_id: BusinessUnitId,
    /// Role set after the mutation.
    pub roles: RoleSet,
    /// Mutation timestamp.
    pub last_updated: DateTime<Utc>,
}

impl From<RoleAssignment> for RoleAssignmentResult {
    fn from(value: RoleAssignment) -> Self {
        Self {
            user_id: value.user_id,
            business_unit_id: value.business_unit_id,
            roles: value.roles,
            last_updated: value.last_updated,
        }
    }
}

/// Read projection of the roles held by one user in one business unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRolesView {
    /// Current role set, empty when no assignment exists.
    pub roles: RoleSet,
    /// Timestamp of the last mutation, absent when the pair was never assigned.
    pub last_updated: Option<DateTime<Utc>>,
}

/// Repository port for role assignment records.
#[async_trait]
pub trait RoleAssignmentRepository: Send + Sync {
    /// Finds the assignment for a business unit and user pair.
    async fn find_assignment(
        &self,
        business_unit_id: &BusinessUnitId,
        user_id: &UserId,
    ) -> AppResult<Option<RoleAssignment>>;

    /// Inserts or replaces the assignment for its business unit and user pair.
    async fn save_assignment(&self, assignment: RoleAssignment) -> AppResult<()>;
}
