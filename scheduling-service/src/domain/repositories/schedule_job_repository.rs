use async_trait::async_trait;
use shared::{DomainResult, JobStatus};
use uuid::Uuid;

use crate::domain::entities::ScheduleJob;

#[async_trait]
pub trait ScheduleJobRepository: Send + Sync {
    async fn create(&self, job: ScheduleJob) -> DomainResult<ScheduleJob>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ScheduleJob>>;
    async fn update_status(
        &self,
        id: Uuid,
        status: JobStatus,
        error_message: Option<String>,
    ) -> DomainResult<()>;
    async fn mark_completed(&self, id: Uuid, slack_report: serde_json::Value) -> DomainResult<()>;
    async fn mark_failed(&self, id: Uuid, error_message: String) -> DomainResult<()>;
}
