mod audit;
mod common;
mod roles;

pub use audit::{AuditLogQueryParams, RoleAuditRecordResponse};
pub use common::HealthResponse;
pub use roles::{RoleAssignmentResponse, RoleUpdateRequest, UserRolesResponse};
