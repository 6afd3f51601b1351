use chrono::{DateTime, SecondsFormat, Utc};
use concierge_application::{RoleAssignmentResult, UserRolesView};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for role add, remove and sync requests.
///
/// `systemId` is optional; when present it must name the system declared in
/// the identity headers.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-update-request.ts"
)]
pub struct RoleUpdateRequest {
    pub roles: Vec<String>,
    #[serde(default)]
    #[ts(optional)]
    pub system_id: Option<String>,
}

/// Roles currently held by a user in a business unit.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-roles-response.ts"
)]
pub struct UserRolesResponse {
    pub roles: Vec<String>,
    /// `null` when the user was never assigned roles in this business unit.
    pub last_updated: Option<String>,
}

/// Assignment state returned by every role mutation.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-assignment-response.ts"
)]
pub struct RoleAssignmentResponse {
    pub user_id: String,
    pub business_unit_id: String,
    pub roles: Vec<String>,
    pub last_updated: String,
}

pub(super) fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<UserRolesView> for UserRolesResponse {
    fn from(value: UserRolesView) -> Self {
        Self {
            roles: value.roles.to_names(),
            last_updated: value.last_updated.map(format_timestamp),
        }
    }
}

impl From<RoleAssignmentResult> for RoleAssignmentResponse {
    fn from(value: RoleAssignmentResult) -> Self {
        Self {
            user_id: value.user_id.as_str().to_owned(),
            business_unit_id: value.business_unit_id.as_str().to_owned(),
            roles: value.roles.to_names(),
            last_updated: format_timestamp(value.last_updated),
        }
    }
}
