use serde::Deserialize;
use shared::Qualification;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub qualification: Qualification,
    pub target_workdays: i32,
    #[serde(default)]
    pub pensum: i16,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub qualification: Option<Qualification>,
    pub target_workdays: Option<i32>,
    pub pensum: Option<i16>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BatchImportEmployeesRequest {
    pub employees: Vec<CreateEmployeeRequest>,
}
