use async_trait::async_trait;
use shared::DomainResult;
use uuid::Uuid;

use crate::api::requests::UpsertAbsenceRawRequest;
use crate::domain::entities::AbsenceRaw;

#[async_trait]
pub trait AbsenceRawRepository: Send + Sync {
    /// Fetch the raw absence strings for an employee, or `None` if never
    /// recorded — callers treat a missing row the same as four empty
    /// strings.
    async fn find_by_employee_id(&self, employee_id: Uuid) -> DomainResult<Option<AbsenceRaw>>;

    /// Create the row if it doesn't exist yet, otherwise overwrite it.
    async fn upsert(
        &self,
        employee_id: Uuid,
        request: UpsertAbsenceRawRequest,
    ) -> DomainResult<AbsenceRaw>;

    async fn delete(&self, employee_id: Uuid) -> DomainResult<()>;
}
