use axum::{extract::Query, http::StatusCode, response::IntoResponse, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{ApiResponse, DomainError};
use utoipa::{IntoParams, ToSchema};

use crate::domain::holiday::HolidayCalculator;

#[derive(Debug, Deserialize, IntoParams)]
pub struct HolidayQuery {
    /// ISO 8601 date, e.g. `2026-12-25`.
    pub date: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HolidayCheckSerializer {
    pub date: String,
    pub is_holiday: bool,
}

/// Whether a given calendar date is a recognized fixed-date public
/// holiday. See `HolidayCalculator` for the limits of this rule set.
#[utoipa::path(
    get,
    path = "/api/v1/holidays/check",
    params(HolidayQuery),
    responses(
        (status = 200, description = "Holiday check result", body = ApiResponse<HolidayCheckSerializer>),
        (status = 400, description = "Invalid date")
    ),
    tag = "holidays"
)]
pub async fn check_holiday(
    Query(query): Query<HolidayQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d")
        .map_err(|e| (StatusCode::BAD_REQUEST, DomainError::InvalidInput(e.to_string()).to_string()))?;

    let calculator = HolidayCalculator::default();
    let response = HolidayCheckSerializer {
        date: query.date,
        is_holiday: calculator.is_holiday(date),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Holiday check completed", response)),
    ))
}
