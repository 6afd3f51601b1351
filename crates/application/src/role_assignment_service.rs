use std::sync::Arc;

use concierge_core::AppResult;
use concierge_domain::{BusinessUnitId, SystemId, UserId};

use crate::RoleRequestPolicy;
use crate::role_assignment_ports::{RoleAssignmentRepository, RoleAuditRepository, UserDirectory};

mod locks;
mod mutations;
mod queries;
mod validation;


use locks::AssignmentLocks;

/// Identifiers of a role request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRoleRequest {
    /// Business unit scope.
    pub business_unit_id: BusinessUnitId,
    /// Target user, known to the user directory.
    pub user_id: UserId,
    /// Allow-listed calling system.
    pub system_id: SystemId,
}

/// Application service owning business-unit-scoped role assignments and
/// their audit trail.
#[derive(Clone)]
pub struct RoleAssignmentService {
    policy: RoleRequestPolicy,
    assignment_repository: Arc<dyn RoleAssignmentRepository>,
    audit_repository: Arc<dyn RoleAuditRepository>,
    user_directory: Arc<dyn UserDirectory>,
    locks: Arc<AssignmentLocks>,
}

impl RoleAssignmentService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        policy: RoleRequestPolicy,
        assignment_repository: Arc<dyn RoleAssignmentRepository>,
        audit_repository: Arc<dyn RoleAuditRepository>,
        user_directory: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            policy,
            assignment_repository,
            audit_repository,
            user_directory,
            locks: Arc::new(AssignmentLocks::default()),
        }
    }

    /// Returns the request policy in effect.
    #[must_use]
    pub fn policy(&self) -> &RoleRequestPolicy {
        &self.policy
    }

    fn parse_scope(&self, business_unit_id: &str) -> AppResult<BusinessUnitId> {
        let business_unit_id = BusinessUnitId::new(business_unit_id)?;
        validation::require_business_unit_prefix(&self.policy, &business_unit_id)?;
        Ok(business_unit_id)
    }
}
