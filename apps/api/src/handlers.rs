use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, Query, State};

use concierge_core::SystemIdentity;

use crate::dto::{
    AuditLogQueryParams, RoleAssignmentResponse, RoleAuditRecordResponse, RoleUpdateRequest,
    UserRolesResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

mod audit;
mod health;
mod roles;

pub use audit::list_audit_log_handler;
pub use health::health_handler;
pub use roles::{
    add_roles_handler, get_user_roles_handler, remove_roles_handler, sync_roles_handler,
};
