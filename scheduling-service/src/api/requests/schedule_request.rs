use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Request body for submitting a roster run. `month` is 1-12; the
/// period covered is the whole calendar month.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateScheduleRequest {
    pub ward_id: Uuid,
    pub year: i32,
    pub month: i16,
}

#[derive(Debug, Clone)]
pub struct ScheduleJobRequest {
    pub job_id: Uuid,
    pub ward_id: Uuid,
    pub year: i32,
    pub month: i16,
}
