use concierge_application::RoleAssignmentService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub role_assignment_service: RoleAssignmentService,
}
