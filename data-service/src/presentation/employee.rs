use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::Qualification;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::entities::Employee;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmployeeSerializer {
    pub id: Uuid,
    pub name: String,
    pub qualification: Qualification,
    pub target_workdays: i32,
    pub pensum: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeSerializer {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            qualification: employee.qualification,
            target_workdays: employee.target_workdays,
            pensum: employee.pensum,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}
