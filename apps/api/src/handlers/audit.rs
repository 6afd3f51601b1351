use super::*;

pub async fn list_audit_log_handler(
    State(state): State<AppState>,
    Path(business_unit_id): Path<String>,
    Query(query): Query<AuditLogQueryParams>,
) -> ApiResult<Json<Vec<RoleAuditRecordResponse>>> {
    let records = state
        .role_assignment_service
        .get_audit_log(business_unit_id.as_str(), query.user_id.as_deref())
        .await?
        .into_iter()
        .map(RoleAuditRecordResponse::from)
        .collect();

    Ok(Json(records))
}
