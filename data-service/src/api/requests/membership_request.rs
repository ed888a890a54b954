use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddMemberRequest {
    pub employee_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct BatchMembershipEntry {
    pub employee_id: Uuid,
    pub ward_name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BatchImportMembershipsRequest {
    pub memberships: Vec<BatchMembershipEntry>,
}
