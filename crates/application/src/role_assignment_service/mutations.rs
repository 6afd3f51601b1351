use super::*;

use chrono::Utc;
use concierge_core::AppError;
use concierge_domain::{RoleChange, RoleSet};
use tracing::info;

use crate::role_assignment_ports::{
    NewRoleAuditRecord, RoleAssignment, RoleAssignmentResult, RoleUpdateInput,
};

impl RoleAssignmentService {
    /// Merges roles into the user's set and records an `add` audit entry.
    pub async fn add_roles(
        &self,
        business_unit_id: &str,
        user_id: &str,
        input: RoleUpdateInput,
    ) -> AppResult<RoleAssignmentResult> {
        self.apply_change(business_unit_id, user_id, input, RoleChange::Add)
            .await
    }

    /// Removes roles from an existing assignment and records a `remove` audit
    /// entry. Fails with not found when the pair was never assigned.
    pub async fn remove_roles(
        &self,
        business_unit_id: &str,
        user_id: &str,
        input: RoleUpdateInput,
    ) -> AppResult<RoleAssignmentResult> {
        self.apply_change(business_unit_id, user_id, input, RoleChange::Remove)
            .await
    }

    /// Replaces the user's set with exactly the given roles and records a
    /// `sync` audit entry.
    pub async fn sync_roles(
        &self,
        business_unit_id: &str,
        user_id: &str,
        input: RoleUpdateInput,
    ) -> AppResult<RoleAssignmentResult> {
        self.apply_change(business_unit_id, user_id, input, RoleChange::Sync)
            .await
    }

    async fn apply_change(
        &self,
        business_unit_id: &str,
        user_id: &str,
        input: RoleUpdateInput,
        change: fn(RoleSet) -> RoleChange,
    ) -> AppResult<RoleAssignmentResult> {
        let request = self
            .validate_request(business_unit_id, user_id, input.system_id.as_str())
            .await?;
        let change = change(RoleSet::from_names(&input.roles)?);

        let _guard = self
            .locks
            .acquire(&request.business_unit_id, &request.user_id)
            .await;

        let existing = self
            .assignment_repository
            .find_assignment(&request.business_unit_id, &request.user_id)
            .await?;

        if existing.is_none() && change.requires_existing_assignment() {
            return Err(AppError::NotFound(format!(
                "no role assignment exists for user '{}' in business unit '{}'",
                request.user_id, request.business_unit_id
            )));
        }

        let previous_roles = existing
            .map(|assignment| assignment.roles)
            .unwrap_or_default();
        let new_roles = change.apply(&previous_roles);
        let now = Utc::now();

        // A failed append must leave the stored assignment untouched.
        let record = self
            .audit_repository
            .append_record(NewRoleAuditRecord {
                business_unit_id: request.business_unit_id.clone(),
                user_id: request.user_id.clone(),
                system_id: request.system_id.clone(),
                action: change.action(),
                previous_roles,
                new_roles: new_roles.clone(),
                timestamp: now,
            })
            .await?;

        let assignment = RoleAssignment {
            business_unit_id: request.business_unit_id,
            user_id: request.user_id,
            roles: new_roles,
            last_updated: now,
            updated_by: request.system_id,
        };
        self.assignment_repository
            .save_assignment(assignment.clone())
            .await?;

        info!(
            business_unit_id = %record.business_unit_id,
            user_id = %record.user_id,
            system_id = %record.system_id,
            action = record.action.as_str(),
            audit_id = record.audit_id,
            role_count = record.new_roles.len(),
            "role assignment updated"
        );

        Ok(RoleAssignmentResult::from(assignment))
    }
}
