use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::entities::{Ward, WardWithMembers};
use crate::presentation::EmployeeSerializer;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WardSerializer {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
    pub parent_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WardSerializer {
    pub fn new(ward: Ward, parent_name: Option<String>) -> Self {
        Self {
            id: ward.id,
            name: ward.name,
            parent_id: ward.parent_id,
            parent_name,
            created_at: ward.created_at,
            updated_at: ward.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResolvedWardSerializer {
    pub ward_id: Uuid,
    pub ward_name: String,
    pub members: Vec<EmployeeSerializer>,
}

impl From<WardWithMembers> for ResolvedWardSerializer {
    fn from(wwm: WardWithMembers) -> Self {
        Self {
            ward_id: wwm.ward.id,
            ward_name: wwm.ward.name,
            members: wwm.members.into_iter().map(EmployeeSerializer::from).collect(),
        }
    }
}
