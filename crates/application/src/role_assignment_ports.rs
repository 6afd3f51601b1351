mod assignments;
mod audit;
mod directory;

pub use assignments::{
    RoleAssignment, RoleAssignmentRepository, RoleAssignmentResult, RoleUpdateInput,
    UserRolesView,
};
pub use audit::{NewRoleAuditRecord, RoleAuditQuery, RoleAuditRecord, RoleAuditRepository};
pub use directory::UserDirectory;
