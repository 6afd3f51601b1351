use async_trait::async_trait;
use chrono::{DateTime, Utc};

use concierge_core::AppResult;
use concierge_domain::{BusinessUnitId, RoleAuditAction, RoleSet, SystemId, UserId};

/// Audit payload emitted for one role mutation, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoleAuditRecord {
    /// Business unit scope.
    pub business_unit_id: BusinessUnitId,
    /// Affected user.
    pub user_id: UserId,
    /// Calling system.
    pub system_id: SystemId,
    /// Mutation kind.
    pub action: RoleAuditAction,
    /// Role set before the mutation.
    pub previous_roles: RoleSet,
    /// Role set after the mutation.
    pub new_roles: RoleSet,
    /// Mutation timestamp.
    pub timestamp: DateTime<Utc>,
}

/// Immutable audit record as stored in the append-only log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAuditRecord {
    /// Monotonic sequence number assigned on append.
    pub audit_id: u64,
    /// Business unit scope.
    pub business_unit_id: BusinessUnitId,
    /// Affected user.
    pub user_id: UserId,
    /// Calling system.
    pub system_id: SystemId,
    /// Mutation kind.
    pub action: RoleAuditAction,
    /// Role set before the mutation.
    pub previous_roles: RoleSet,
    /// Role set after the mutation.
    pub new_roles: RoleSet,
    /// Mutation timestamp.
    pub timestamp: DateTime<Utc>,
}

impl RoleAuditRecord {
    /// Builds the stored record from a pending payload and its sequence number.
    #[must_use]
    pub fn from_new(audit_id: u64, record: NewRoleAuditRecord) -> Self {
        Self {
            audit_id,
            business_unit_id: record.business_unit_id,
            user_id: record.user_id,
            system_id: record.system_id,
            action: record.action,
            previous_roles: record.previous_roles,
            new_roles: record.new_roles,
            timestamp: record.timestamp,
        }
    }
}

/// Filter for audit log reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAuditQuery {
    /// Business unit scope.
    pub business_unit_id: BusinessUnitId,
    /// Optional user filter.
    pub user_id: Option<UserId>,
}

impl RoleAuditQuery {
    /// Returns whether a stored record matches this query.
    #[must_use]
    pub fn matches(&self, record: &RoleAuditRecord) -> bool {
        record.business_unit_id == self.business_unit_id
            && self
                .user_id
                .as_ref()
                .is_none_or(|user_id| &record.user_id == user_id)
    }
}

/// Port for the append-only role audit log.
#[async_trait]
pub trait RoleAuditRepository: Send + Sync {
    /// Appends one record and returns it with its assigned sequence number.
    async fn append_record(&self, record: NewRoleAuditRecord) -> AppResult<RoleAuditRecord>;

    /// Lists matching records in insertion order.
    async fn list_records(&self, query: RoleAuditQuery) -> AppResult<Vec<RoleAuditRecord>>;
}
