use super::*;

use crate::role_assignment_ports::{RoleAuditQuery, RoleAuditRecord, UserRolesView};

impl RoleAssignmentService {
    /// Returns the roles held by a user in a business unit.
    ///
    /// A pair that was never assigned yields an empty set with no
    /// `last_updated` timestamp.
    pub async fn get_user_roles(
        &self,
        business_unit_id: &str,
        user_id: &str,
    ) -> AppResult<UserRolesView> {
        let business_unit_id = self.parse_scope(business_unit_id)?;
        let user_id = UserId::new(user_id)?;

        let view = self
            .assignment_repository
            .find_assignment(&business_unit_id, &user_id)
            .await?
            .map_or_else(
                || UserRolesView {
                    roles: Default::default(),
                    last_updated: None,
                },
                |assignment| UserRolesView {
                    roles: assignment.roles,
                    last_updated: Some(assignment.last_updated),
                },
            );

        Ok(view)
    }

    /// Returns audit records for a business unit, optionally narrowed to one
    /// user, in the order they were appended.
    pub async fn get_audit_log(
        &self,
        business_unit_id: &str,
        user_id: Option<&str>,
    ) -> AppResult<Vec<RoleAuditRecord>> {
        let business_unit_id = self.parse_scope(business_unit_id)?;
        let user_id = user_id.map(UserId::new).transpose()?;

        self.audit_repository
            .list_records(RoleAuditQuery {
                business_unit_id,
                user_id,
            })
            .await
    }
}
