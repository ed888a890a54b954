use async_trait::async_trait;
use shared::{DomainResult, PaginationParams, Qualification};
use uuid::Uuid;

use crate::api::requests::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::domain::entities::Employee;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn create(&self, request: CreateEmployeeRequest) -> DomainResult<Employee>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Employee>>;

    async fn find_by_ids(&self, ids: Vec<Uuid>) -> DomainResult<Vec<Employee>>;

    async fn list(&self, params: PaginationParams) -> DomainResult<(Vec<Employee>, u64)>;

    #[allow(dead_code)]
    async fn list_by_qualification(
        &self,
        qualification: Qualification,
        params: PaginationParams,
    ) -> DomainResult<(Vec<Employee>, u64)>;

    async fn update(&self, id: Uuid, request: UpdateEmployeeRequest) -> DomainResult<Employee>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;

    /// Direct members of a ward (not resolved through descendant wards).
    async fn find_by_ward_id(&self, ward_id: Uuid) -> DomainResult<Vec<Employee>>;
}
