use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use shared::{ApiResponse, ShiftCode};
use utoipa::ToSchema;

use crate::domain::shift_catalog;

#[derive(Debug, Serialize, ToSchema)]
pub struct ShiftCatalogEntrySerializer {
    pub code: ShiftCode,
    pub description: &'static str,
}

/// The compiled-in shift catalog, for client-side validation only — the
/// solver does not read this endpoint.
#[utoipa::path(
    get,
    path = "/api/v1/shift-catalog",
    responses(
        (status = 200, description = "Shift catalog", body = ApiResponse<Vec<ShiftCatalogEntrySerializer>>)
    ),
    tag = "shift-catalog"
)]
pub async fn list_shift_catalog() -> impl IntoResponse {
    let entries: Vec<ShiftCatalogEntrySerializer> = shift_catalog::entries()
        .iter()
        .map(|e| ShiftCatalogEntrySerializer {
            code: e.code,
            description: e.description,
        })
        .collect();

    (
        StatusCode::OK,
        Json(ApiResponse::success("Shift catalog retrieved", entries)),
    )
}
