use super::*;

use concierge_core::AppError;
use tracing::warn;

impl RoleAssignmentService {
    /// Validates the identifiers of a mutating role request.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// non-empty business unit, user and system ids, allow-listed system,
    /// user known to the directory, then the business unit prefix. Nothing
    /// is written.
    pub async fn validate_request(
        &self,
        business_unit_id: &str,
        user_id: &str,
        system_id: &str,
    ) -> AppResult<ValidatedRoleRequest> {
        let result = self
            .check_request(business_unit_id, user_id, system_id)
            .await;

        if let Err(error) = &result {
            warn!(business_unit_id, user_id, system_id, %error, "role request rejected");
        }

        result
    }

    async fn check_request(
        &self,
        business_unit_id: &str,
        user_id: &str,
        system_id: &str,
    ) -> AppResult<ValidatedRoleRequest> {
        let business_unit_id = BusinessUnitId::new(business_unit_id)?;
        let user_id = UserId::new(user_id)?;
        let system_id = SystemId::new(system_id)?;

        if !self.policy.is_allowed_system(&system_id) {
            return Err(AppError::Validation(format!(
                "system '{system_id}' is not allowed to manage roles"
            )));
        }

        if self.user_directory.find_user(&user_id).await?.is_none() {
            return Err(AppError::Validation(format!("user '{user_id}' does not exist")));
        }

        require_business_unit_prefix(&self.policy, &business_unit_id)?;

        Ok(ValidatedRoleRequest {
            business_unit_id,
            user_id,
            system_id,
        })
    }
}

pub(super) fn require_business_unit_prefix(
    policy: &RoleRequestPolicy,
    business_unit_id: &BusinessUnitId,
) -> AppResult<()> {
    if policy.accepts_business_unit(business_unit_id) {
        return Ok(());
    }

    Err(AppError::Validation(format!(
        "business unit id '{business_unit_id}' must start with '{}'",
        policy.business_unit_prefix()
    )))
}
