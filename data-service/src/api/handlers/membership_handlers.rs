use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::{cache_keys, invalidate_cache, DomainError};
use uuid::Uuid;

use crate::api::requests::AddMemberRequest;
use crate::api::state::AppState;
use crate::presentation::{EmployeeSerializer, MembershipSerializer};

/// Add an employee to a ward
#[utoipa::path(
    post,
    path = "/api/v1/wards/{ward_id}/members",
    params(
        ("ward_id" = Uuid, Path, description = "Ward ID")
    ),
    request_body = AddMemberRequest,
    responses(
        (status = 201, description = "Member added successfully", body = MembershipSerializer),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    ),
    tag = "memberships"
)]
pub async fn add_member(
    State(state): State<AppState>,
    Path(ward_id): Path<Uuid>,
    Json(request): Json<AddMemberRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let membership = state
        .membership_repo
        .add_member(request.employee_id, ward_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let employee = state
        .employee_repo
        .find_by_id(request.employee_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or((StatusCode::NOT_FOUND, "Employee not found".to_string()))?;
    let ward = state
        .ward_repo
        .find_by_id(ward_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or((StatusCode::NOT_FOUND, "Ward not found".to_string()))?;

    let mut redis_conn = state.redis_pool.clone();
    invalidate_cache(&mut redis_conn, &cache_keys::resolved_members(ward_id)).await;

    Ok((
        StatusCode::CREATED,
        Json(MembershipSerializer::new(membership, &employee, &ward)),
    ))
}

/// Remove an employee from a ward
#[utoipa::path(
    delete,
    path = "/api/v1/wards/{ward_id}/members/{employee_id}",
    params(
        ("ward_id" = Uuid, Path, description = "Ward ID"),
        ("employee_id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Member removed successfully"),
        (status = 404, description = "Membership not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "memberships"
)]
pub async fn remove_member(
    State(state): State<AppState>,
    Path((ward_id, employee_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .membership_repo
        .remove_member(employee_id, ward_id)
        .await
        .map_err(|e| match e {
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?;

    let mut redis_conn = state.redis_pool.clone();
    invalidate_cache(&mut redis_conn, &cache_keys::resolved_members(ward_id)).await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get all direct members of a ward (not hierarchical)
#[utoipa::path(
    get,
    path = "/api/v1/wards/{ward_id}/members",
    params(
        ("ward_id" = Uuid, Path, description = "Ward ID")
    ),
    responses(
        (status = 200, description = "Ward members", body = Vec<EmployeeSerializer>),
        (status = 500, description = "Internal server error")
    ),
    tag = "memberships"
)]
pub async fn get_ward_members(
    State(state): State<AppState>,
    Path(ward_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let employees = state
        .employee_repo
        .find_by_ward_id(ward_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let response: Vec<EmployeeSerializer> =
        employees.into_iter().map(EmployeeSerializer::from).collect();

    Ok((StatusCode::OK, Json(response)))
}
