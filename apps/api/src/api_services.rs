use std::sync::Arc;

use concierge_application::RoleAssignmentService;
use concierge_core::AppResult;
use concierge_infrastructure::{
    InMemoryRoleAssignmentRepository, InMemoryRoleAuditRepository, InMemoryUserDirectory,
};
use tracing::{debug, info};

use crate::api_config::ApiConfig;
use crate::dev_seed;
use crate::state::AppState;

pub async fn build_app_state(config: &ApiConfig) -> AppResult<AppState> {
    let users = if config.seed_demo_users {
        dev_seed::demo_users()?
    } else {
        Vec::new()
    };

    for user in &users {
        debug!(
            user_id = %user.id(),
            name = user.name(),
            email = user.email().as_str(),
            status = user.status().as_str(),
            platform_role = user.platform_role(),
            "seeded directory user"
        );
    }

    let user_directory = Arc::new(InMemoryUserDirectory::new(users));
    info!(
        users = user_directory.user_count().await,
        "user directory ready"
    );

    let role_assignment_service = RoleAssignmentService::new(
        config.role_policy.clone(),
        Arc::new(InMemoryRoleAssignmentRepository::new()),
        Arc::new(InMemoryRoleAuditRepository::new()),
        user_directory,
    );

    let policy = role_assignment_service.policy();
    info!(
        allowed_systems = policy.allowed_system_ids().count(),
        business_unit_prefix = policy.business_unit_prefix(),
        "role assignment service ready"
    );

    Ok(AppState {
        role_assignment_service,
    })
}
