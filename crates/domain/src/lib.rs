//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod business_unit;
mod security;
mod user;

pub use business_unit::BusinessUnitId;
pub use security::{RoleAuditAction, RoleChange, RoleName, RoleSet, SystemId};
pub use user::{EmailAddress, User, UserId, UserStatus};
