//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_role_assignment_repository;
mod in_memory_role_audit_repository;
mod in_memory_user_directory;

pub use in_memory_role_assignment_repository::InMemoryRoleAssignmentRepository;
pub use in_memory_role_audit_repository::InMemoryRoleAuditRepository;
pub use in_memory_user_directory::InMemoryUserDirectory;
