use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{Identifiable, JobStatus, Timestamped};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One request to build a roster for a ward/year/month, and its lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ScheduleJob {
    pub id: Uuid,
    pub ward_id: Uuid,
    pub year: i32,
    pub month: i16,
    pub status: JobStatus,
    pub error_message: Option<String>,
    /// Soft-constraint slack incurred by the accepted roster, keyed by
    /// constraint id. `None` until the job completes.
    pub slack_report: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Identifiable for ScheduleJob {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for ScheduleJob {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
