use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::ShiftCode;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One employee-day-shift assignment produced by a completed roster run.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ShiftAssignment {
    pub id: Uuid,
    pub schedule_job_id: Uuid,
    pub employee_id: Uuid,
    pub date: NaiveDate,
    pub shift: ShiftCode,
    pub created_at: DateTime<Utc>,
}
