use async_trait::async_trait;
use concierge_application::{
    NewRoleAuditRecord, RoleAuditQuery, RoleAuditRecord, RoleAuditRepository,
};
use concierge_core::{AppError, AppResult};
use tokio::sync::RwLock;
use tracing::debug;

/// Append-only in-memory role audit log.
///
/// Records are kept in insertion order and numbered from 1.
#[derive(Debug, Default)]
pub struct InMemoryRoleAuditRepository {
    records: RwLock<Vec<RoleAuditRecord>>,
}

impl InMemoryRoleAuditRepository {
    /// Creates an empty audit log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleAuditRepository for InMemoryRoleAuditRepository {
    async fn append_record(&self, record: NewRoleAuditRecord) -> AppResult<RoleAuditRecord> {
        let mut records = self.records.write().await;
        let audit_id = u64::try_from(records.len())
            .ok()
            .and_then(|count| count.checked_add(1))
            .ok_or_else(|| AppError::Internal("role audit log sequence exhausted".to_owned()))?;

        let stored = RoleAuditRecord::from_new(audit_id, record);
        records.push(stored.clone());
        debug!(audit_id, "role audit record appended");

        Ok(stored)
    }

    async fn list_records(&self, query: RoleAuditQuery) -> AppResult<Vec<RoleAuditRecord>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|record| query.matches(record))
            .cloned()
            .collect())
    }
}
