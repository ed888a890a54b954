use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use futures::future::try_join_all;
use shared::{
    cache_keys, cache_ttl, get_cached, invalidate_cache, set_cached, ApiResponse, DomainError,
    PaginationParams,
};
use uuid::Uuid;

use crate::api::requests::{CreateWardRequest, UpdateWardRequest};
use crate::api::state::AppState;
use crate::domain::entities::Ward;
use crate::presentation::{ResolvedWardSerializer, WardSerializer};

async fn resolve_parent_name(
    state: &AppState,
    ward: &Ward,
) -> Result<Option<String>, (StatusCode, String)> {
    if let Some(parent_id) = ward.parent_id {
        let parent = state
            .ward_repo
            .find_by_id(parent_id)
            .await
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
        Ok(parent.map(|p| p.name))
    } else {
        Ok(None)
    }
}

async fn to_ward_serializer(
    state: &AppState,
    ward: Ward,
) -> Result<WardSerializer, (StatusCode, String)> {
    let parent_name = resolve_parent_name(state, &ward).await?;
    Ok(WardSerializer::new(ward, parent_name))
}

#[utoipa::path(
    post,
    path = "/api/v1/wards",
    request_body = CreateWardRequest,
    responses(
        (status = 201, description = "Ward created successfully", body = ApiResponse<WardSerializer>),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    ),
    tag = "wards"
)]
pub async fn create_ward(
    State(state): State<AppState>,
    Json(request): Json<CreateWardRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let ward = state
        .ward_repo
        .create(request)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let serializer = to_ward_serializer(&state, ward).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Ward created successfully", serializer)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/wards/{id}",
    params(
        ("id" = Uuid, Path, description = "Ward ID")
    ),
    responses(
        (status = 200, description = "Ward found", body = ApiResponse<WardSerializer>),
        (status = 404, description = "Ward not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "wards"
)]
pub async fn get_ward_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let ward = state
        .ward_repo
        .find_by_id(id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or((StatusCode::NOT_FOUND, "Ward not found".to_string()))?;

    let serializer = to_ward_serializer(&state, ward).await?;
    let response = ApiResponse::success("Ward retrieved successfully", serializer);

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v1/wards",
    params(PaginationParams),
    responses(
        (status = 200, description = "Ward list", body = ApiResponse<Vec<WardSerializer>>),
        (status = 500, description = "Internal server error")
    ),
    tag = "wards"
)]
pub async fn list_wards(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let (wards, total) = state
        .ward_repo
        .list(params)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let serializer_futures: Vec<_> = wards
        .into_iter()
        .map(|ward| to_ward_serializer(&state, ward))
        .collect();

    let serialized = try_join_all(serializer_futures).await?;

    let response = ApiResponse::with_total("Ward list retrieved successfully", serialized, total);

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/v1/wards/{id}",
    params(
        ("id" = Uuid, Path, description = "Ward ID")
    ),
    request_body = UpdateWardRequest,
    responses(
        (status = 200, description = "Ward updated successfully", body = ApiResponse<WardSerializer>),
        (status = 404, description = "Ward not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "wards"
)]
pub async fn update_ward(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateWardRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let ward = state
        .ward_repo
        .update(id, request)
        .await
        .map_err(|e| match e {
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?;

    let mut redis_conn = state.redis_pool.clone();
    invalidate_cache(&mut redis_conn, &cache_keys::resolved_members(id)).await;

    let serializer = to_ward_serializer(&state, ward).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Ward updated successfully", serializer)),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/wards/{id}",
    params(
        ("id" = Uuid, Path, description = "Ward ID")
    ),
    responses(
        (status = 204, description = "Ward deleted successfully"),
        (status = 404, description = "Ward not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "wards"
)]
pub async fn delete_ward(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state.ward_repo.delete(id).await.map_err(|e| match e {
        DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    })?;

    let mut redis_conn = state.redis_pool.clone();
    invalidate_cache(&mut redis_conn, &cache_keys::resolved_members(id)).await;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/wards/{id}/resolved-members",
    params(
        ("id" = Uuid, Path, description = "Ward ID")
    ),
    responses(
        (status = 200, description = "Resolved employees grouped by sub-ward", body = ApiResponse<Vec<ResolvedWardSerializer>>),
        (status = 404, description = "Ward not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "wards"
)]
pub async fn get_resolved_members(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .ward_repo
        .find_by_id(id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or((
            StatusCode::NOT_FOUND,
            format!("Ward with id {} not found", id),
        ))?;

    let cache_key = cache_keys::resolved_members(id);
    let mut redis_conn = state.redis_pool.clone();

    if let Some(response) =
        get_cached::<ApiResponse<Vec<ResolvedWardSerializer>>>(&mut redis_conn, &cache_key).await
    {
        return Ok((StatusCode::OK, Json(response)));
    }

    let (wards_with_members, total_unique) = state
        .ward_repo
        .get_resolved_members(id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let serialized: Vec<ResolvedWardSerializer> = wards_with_members
        .into_iter()
        .map(ResolvedWardSerializer::from)
        .collect();

    let response = ApiResponse::with_total(
        "Resolved members retrieved successfully",
        serialized,
        total_unique,
    );

    set_cached(
        &mut redis_conn,
        &cache_key,
        &response,
        cache_ttl::RESOLVED_MEMBERS,
    )
    .await;

    Ok((StatusCode::OK, Json(response)))
}
