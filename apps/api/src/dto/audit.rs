use concierge_application::RoleAuditRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::roles::format_timestamp;

/// Query parameters for audit log listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogQueryParams {
    pub user_id: Option<String>,
}

/// API representation of one role audit record.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-audit-record-response.ts"
)]
pub struct RoleAuditRecordResponse {
    #[ts(type = "number")]
    pub id: u64,
    pub user_id: String,
    pub business_unit_id: String,
    pub system_id: String,
    pub action: String,
    pub previous_roles: Vec<String>,
    pub new_roles: Vec<String>,
    pub timestamp: String,
}

impl From<RoleAuditRecord> for RoleAuditRecordResponse {
    fn from(value: RoleAuditRecord) -> Self {
        Self {
            id: value.audit_id,
            user_id: value.user_id.as_str().to_owned(),
            business_unit_id: value.business_unit_id.as_str().to_owned(),
            system_id: value.system_id.as_str().to_owned(),
            action: value.action.as_str().to_owned(),
            previous_roles: value.previous_roles.to_names(),
            new_roles: value.new_roles.to_names(),
            timestamp: format_timestamp(value.timestamp),
        }
    }
}
