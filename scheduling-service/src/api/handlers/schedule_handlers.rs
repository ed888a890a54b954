use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use shared::JobStatus;
use uuid::Uuid;

use crate::api::requests::{CreateScheduleRequest, ScheduleJobRequest};
use crate::api::state::AppState;
use crate::domain::entities::ScheduleJob;
use crate::presentation::{
    ScheduleJobSerialize, ScheduleResultSerialize, ScheduleStatusSerialize,
    ShiftAssignmentSerialize,
};

/// Submit a roster-generation run for a ward/year/month.
#[utoipa::path(
    post,
    path = "/api/v1/schedules",
    request_body = CreateScheduleRequest,
    responses(
        (status = 202, description = "Schedule job accepted for processing", body = ScheduleJobSerialize),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Internal server error")
    ),
    tag = "schedules"
)]
pub async fn submit_schedule(
    State(state): State<AppState>,
    Json(request): Json<CreateScheduleRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if !(1..=12).contains(&request.month) {
        return Err((
            StatusCode::BAD_REQUEST,
            "month must be between 1 and 12".to_string(),
        ));
    }

    let job_id = Uuid::new_v4();
    let now = Utc::now();

    let job = ScheduleJob {
        id: job_id,
        ward_id: request.ward_id,
        year: request.year,
        month: request.month,
        status: JobStatus::Pending,
        error_message: None,
        slack_report: None,
        created_at: now,
        updated_at: now,
        completed_at: None,
    };

    let created_job = state
        .job_repo
        .create(job)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let schedule_request = ScheduleJobRequest {
        job_id: created_job.id,
        ward_id: created_job.ward_id,
        year: created_job.year,
        month: created_job.month,
    };

    state
        .schedule_sender
        .send(schedule_request)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("failed to submit job: {e}"),
            )
        })?;

    let response = ScheduleJobSerialize::from(created_job);

    Ok((StatusCode::ACCEPTED, Json(response)))
}

/// Get schedule job status.
#[utoipa::path(
    get,
    path = "/api/v1/schedules/{schedule_id}/status",
    params(
        ("schedule_id" = Uuid, Path, description = "Schedule job ID")
    ),
    responses(
        (status = 200, description = "Schedule status retrieved", body = ScheduleStatusSerialize),
        (status = 404, description = "Schedule not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "schedules"
)]
pub async fn get_schedule_status(
    State(state): State<AppState>,
    Path(schedule_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let job = state
        .job_repo
        .find_by_id(schedule_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or((StatusCode::NOT_FOUND, "schedule not found".to_string()))?;

    let response = ScheduleStatusSerialize::from(job);

    Ok((StatusCode::OK, Json(response)))
}

/// Get a completed roster's assignments and slack report.
#[utoipa::path(
    get,
    path = "/api/v1/schedules/{schedule_id}",
    params(
        ("schedule_id" = Uuid, Path, description = "Schedule job ID")
    ),
    responses(
        (status = 200, description = "Schedule result retrieved", body = ScheduleResultSerialize),
        (status = 404, description = "Schedule not found"),
        (status = 400, description = "Schedule not completed yet"),
        (status = 500, description = "Internal server error")
    ),
    tag = "schedules"
)]
pub async fn get_schedule_result(
    State(state): State<AppState>,
    Path(schedule_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let job = state
        .job_repo
        .find_by_id(schedule_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or((StatusCode::NOT_FOUND, "schedule not found".to_string()))?;

    if job.status != JobStatus::Completed {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("schedule is not completed yet, current status: {:?}", job.status),
        ));
    }

    let assignments = state
        .assignment_repo
        .find_by_job_id(schedule_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let assignment_responses: Vec<ShiftAssignmentSerialize> =
        assignments.into_iter().map(ShiftAssignmentSerialize::from).collect();

    let response = ScheduleResultSerialize {
        schedule_id: job.id,
        ward_id: job.ward_id,
        year: job.year,
        month: job.month,
        assignments: assignment_responses,
        slack_report: job.slack_report,
    };

    Ok((StatusCode::OK, Json(response)))
}
