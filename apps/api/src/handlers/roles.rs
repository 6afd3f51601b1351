use super::*;

use concierge_application::RoleUpdateInput;
use concierge_core::AppError;

pub async fn get_user_roles_handler(
    State(state): State<AppState>,
    Path((business_unit_id, user_id)): Path<(String, String)>,
) -> ApiResult<Json<UserRolesResponse>> {
    let view = state
        .role_assignment_service
        .get_user_roles(business_unit_id.as_str(), user_id.as_str())
        .await?;

    Ok(Json(UserRolesResponse::from(view)))
}

pub async fn add_roles_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<SystemIdentity>,
    Path((business_unit_id, user_id)): Path<(String, String)>,
    payload: Result<Json<RoleUpdateRequest>, JsonRejection>,
) -> ApiResult<Json<RoleAssignmentResponse>> {
    let input = role_update_input(&caller, payload)?;
    let result = state
        .role_assignment_service
        .add_roles(business_unit_id.as_str(), user_id.as_str(), input)
        .await?;

    Ok(Json(RoleAssignmentResponse::from(result)))
}

pub async fn remove_roles_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<SystemIdentity>,
    Path((business_unit_id, user_id)): Path<(String, String)>,
    payload: Result<Json<RoleUpdateRequest>, JsonRejection>,
) -> ApiResult<Json<RoleAssignmentResponse>> {
    let input = role_update_input(&caller, payload)?;
    let result = state
        .role_assignment_service
        .remove_roles(business_unit_id.as_str(), user_id.as_str(), input)
        .await?;

    Ok(Json(RoleAssignmentResponse::from(result)))
}

pub async fn sync_roles_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<SystemIdentity>,
    Path((business_unit_id, user_id)): Path<(String, String)>,
    payload: Result<Json<RoleUpdateRequest>, JsonRejection>,
) -> ApiResult<Json<RoleAssignmentResponse>> {
    let input = role_update_input(&caller, payload)?;
    let result = state
        .role_assignment_service
        .sync_roles(business_unit_id.as_str(), user_id.as_str(), input)
        .await?;

    Ok(Json(RoleAssignmentResponse::from(result)))
}

/// The header identity is authoritative for auditing; a body `systemId`
/// may only repeat it.
fn role_update_input(
    caller: &SystemIdentity,
    payload: Result<Json<RoleUpdateRequest>, JsonRejection>,
) -> ApiResult<RoleUpdateInput> {
    let Json(payload) = payload?;

    if let Some(declared) = payload.system_id.as_deref()
        && declared != caller.system_id()
    {
        return Err(AppError::Forbidden(format!(
            "body systemId '{declared}' does not match caller '{}'",
            caller.system_id()
        ))
        .into());
    }

    Ok(RoleUpdateInput {
        roles: payload.roles,
        system_id: caller.system_id().to_owned(),
    })
}
