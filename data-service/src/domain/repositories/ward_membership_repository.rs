use async_trait::async_trait;
use shared::DomainResult;
use uuid::Uuid;

use crate::domain::entities::WardMembership;

#[async_trait]
pub trait WardMembershipRepository: Send + Sync {
    async fn add_member(&self, employee_id: Uuid, ward_id: Uuid) -> DomainResult<WardMembership>;

    async fn remove_member(&self, employee_id: Uuid, ward_id: Uuid) -> DomainResult<()>;
}
