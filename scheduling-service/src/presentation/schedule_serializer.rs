use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use shared::{JobStatus, ShiftCode};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::entities::{ScheduleJob, ShiftAssignment};

/// Schedule job response right after submission.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleJobSerialize {
    pub schedule_id: Uuid,
    pub status: JobStatus,
}

impl From<ScheduleJob> for ScheduleJobSerialize {
    fn from(job: ScheduleJob) -> Self {
        Self {
            schedule_id: job.id,
            status: job.status,
        }
    }
}

/// Schedule status response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleStatusSerialize {
    pub schedule_id: Uuid,
    pub ward_id: Uuid,
    pub year: i32,
    pub month: i16,
    pub status: JobStatus,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<ScheduleJob> for ScheduleStatusSerialize {
    fn from(job: ScheduleJob) -> Self {
        Self {
            schedule_id: job.id,
            ward_id: job.ward_id,
            year: job.year,
            month: job.month,
            status: job.status,
            error_message: job.error_message,
            created_at: job.created_at,
            updated_at: job.updated_at,
            completed_at: job.completed_at,
        }
    }
}

/// One employee-day-shift assignment in a completed roster.
#[derive(Debug, Serialize, ToSchema)]
pub struct ShiftAssignmentSerialize {
    pub employee_id: Uuid,
    pub date: NaiveDate,
    pub shift: ShiftCode,
}

impl From<ShiftAssignment> for ShiftAssignmentSerialize {
    fn from(assignment: ShiftAssignment) -> Self {
        Self {
            employee_id: assignment.employee_id,
            date: assignment.date,
            shift: assignment.shift,
        }
    }
}

/// Complete schedule result, including the soft-constraint slack each
/// penalty term incurred, for operators to judge solution quality.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleResultSerialize {
    pub schedule_id: Uuid,
    pub ward_id: Uuid,
    pub year: i32,
    pub month: i16,
    pub assignments: Vec<ShiftAssignmentSerialize>,
    pub slack_report: Option<serde_json::Value>,
}
