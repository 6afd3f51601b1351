//! Application services and ports.

#![forbid(unsafe_code)]

mod role_assignment_ports;
mod role_assignment_service;
mod role_request_policy;

pub use role_assignment_ports::{
    NewRoleAuditRecord, RoleAssignment, RoleAssignmentRepository, RoleAssignmentResult,
    RoleAuditQuery, RoleAuditRecord, RoleAuditRepository, RoleUpdateInput, UserDirectory,
    UserRolesView,
};
pub use role_assignment_service::{RoleAssignmentService, ValidatedRoleRequest};
pub use role_request_policy::{
    DEFAULT_ALLOWED_SYSTEM_IDS, DEFAULT_BUSINESS_UNIT_PREFIX, RoleRequestPolicy,
};
