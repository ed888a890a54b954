use async_trait::async_trait;
use shared::DomainResult;
use uuid::Uuid;

use crate::domain::entities::ShiftAssignment;

#[async_trait]
pub trait ShiftAssignmentRepository: Send + Sync {
    async fn create_batch(&self, assignments: Vec<ShiftAssignment>) -> DomainResult<()>;
    async fn find_by_job_id(&self, job_id: Uuid) -> DomainResult<Vec<ShiftAssignment>>;
    async fn delete_by_job_id(&self, job_id: Uuid) -> DomainResult<()>;
}
