use async_trait::async_trait;
use shared::{DomainResult, PaginationParams};
use uuid::Uuid;

use crate::api::requests::{CreateWardRequest, UpdateWardRequest};
use crate::domain::entities::{Ward, WardWithMembers};

#[async_trait]
pub trait WardRepository: Send + Sync {
    async fn create(&self, request: CreateWardRequest) -> DomainResult<Ward>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Ward>>;

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Ward>>;

    async fn list(&self, params: PaginationParams) -> DomainResult<(Vec<Ward>, u64)>;

    #[allow(dead_code)]
    async fn list_by_parent_id(&self, parent_id: Uuid) -> DomainResult<Vec<Ward>>;

    async fn update(&self, id: Uuid, request: UpdateWardRequest) -> DomainResult<Ward>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;

    /// All descendant ward IDs (recursive), not including `ward_id` itself.
    async fn get_descendant_ids(&self, ward_id: Uuid) -> DomainResult<Vec<Uuid>>;

    /// `ward_id` and every descendant ward, each with its direct employees,
    /// plus the total count of distinct employees across all of them.
    async fn get_resolved_members(&self, ward_id: Uuid) -> DomainResult<(Vec<WardWithMembers>, u64)>;
}
