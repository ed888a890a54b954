use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use futures::future::join_all;
use serde::Serialize;
use shared::{cache_keys, invalidate_cache_pattern, ApiResponse};
use utoipa::ToSchema;

use crate::api::requests::{BatchImportEmployeesRequest, BatchImportMembershipsRequest};
use crate::api::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct BatchImportSerializer {
    pub success_count: usize,
    pub error_count: usize,
    pub errors: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/batch/employees",
    request_body = BatchImportEmployeesRequest,
    responses(
        (status = 200, description = "Batch import completed", body = ApiResponse<BatchImportSerializer>),
        (status = 500, description = "Internal server error")
    ),
    tag = "batch"
)]
pub async fn batch_import_employees(
    State(state): State<AppState>,
    Json(request): Json<BatchImportEmployeesRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let create_futures: Vec<_> = request
        .employees
        .into_iter()
        .map(|employee_request| {
            let repo = state.employee_repo.clone();
            async move { repo.create(employee_request).await }
        })
        .collect();

    let results = join_all(create_futures).await;

    let mut success_count = 0;
    let mut error_count = 0;
    let mut errors = Vec::new();

    for result in results {
        match result {
            Ok(_) => success_count += 1,
            Err(e) => {
                error_count += 1;
                errors.push(e.to_string());
            }
        }
    }

    let data = BatchImportSerializer {
        success_count,
        error_count,
        errors,
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Batch employee import completed",
            data,
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/batch/memberships",
    request_body = BatchImportMembershipsRequest,
    responses(
        (status = 200, description = "Batch import completed", body = ApiResponse<BatchImportSerializer>),
        (status = 500, description = "Internal server error")
    ),
    tag = "batch"
)]
pub async fn batch_import_memberships(
    State(state): State<AppState>,
    Json(request): Json<BatchImportMembershipsRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut success_count = 0;
    let mut error_count = 0;
    let mut errors = Vec::new();

    for entry in &request.memberships {
        let ward = match state.ward_repo.find_by_name(&entry.ward_name).await {
            Ok(Some(w)) => w,
            Ok(None) => {
                error_count += 1;
                errors.push(format!("Ward '{}' not found", entry.ward_name));
                continue;
            }
            Err(e) => {
                error_count += 1;
                errors.push(format!(
                    "Error looking up ward '{}': {}",
                    entry.ward_name, e
                ));
                continue;
            }
        };

        match state
            .membership_repo
            .add_member(entry.employee_id, ward.id)
            .await
        {
            Ok(_) => success_count += 1,
            Err(e) => {
                error_count += 1;
                errors.push(format!(
                    "Failed to add '{}' to '{}': {}",
                    entry.employee_id, entry.ward_name, e
                ));
            }
        }
    }

    // Ward hierarchy didn't change, but resolved-members membership sets did.
    let mut redis_conn = state.redis_pool.clone();
    invalidate_cache_pattern(&mut redis_conn, cache_keys::RESOLVED_MEMBERS_PATTERN).await;

    let data = BatchImportSerializer {
        success_count,
        error_count,
        errors,
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Batch memberships import completed",
            data,
        )),
    ))
}
