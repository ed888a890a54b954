use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use shared::{ApiResponse, DomainError};
use uuid::Uuid;

use crate::api::requests::UpsertAbsenceRawRequest;
use crate::api::state::AppState;
use crate::presentation::AbsenceRawSerializer;

/// Raw absence-token strings for an employee. An employee with no recorded
/// absences returns four empty strings rather than a 404.
#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}/absences",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Absence record", body = ApiResponse<AbsenceRawSerializer>),
        (status = 500, description = "Internal server error")
    ),
    tag = "absences"
)]
pub async fn get_absences(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let raw = state
        .absence_repo
        .find_by_employee_id(id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let serializer = match raw {
        Some(raw) => AbsenceRawSerializer::from(raw),
        None => AbsenceRawSerializer {
            employee_id: id,
            sl: String::new(),
            fe: String::new(),
            uw: String::new(),
            w: String::new(),
            updated_at: Utc::now(),
        },
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Absence record retrieved", serializer)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/employees/{id}/absences",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    request_body = UpsertAbsenceRawRequest,
    responses(
        (status = 200, description = "Absence record updated", body = ApiResponse<AbsenceRawSerializer>),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "absences"
)]
pub async fn upsert_absences(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpsertAbsenceRawRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let raw = state
        .absence_repo
        .upsert(id, request)
        .await
        .map_err(|e| match e {
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Absence record updated",
            AbsenceRawSerializer::from(raw),
        )),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/employees/{id}/absences",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Absence record cleared"),
        (status = 500, description = "Internal server error")
    ),
    tag = "absences"
)]
pub async fn delete_absences(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .absence_repo
        .delete(id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(StatusCode::NO_CONTENT)
}
