pub mod absence_handlers;
pub mod batch_handlers;
pub mod catalog_handlers;
pub mod employee_handlers;
pub mod holiday_handlers;
pub mod membership_handlers;
pub mod ward_handlers;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Health check handler
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
