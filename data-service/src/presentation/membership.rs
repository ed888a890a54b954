use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::entities::{Employee, Ward, WardMembership};

/// Membership serializer DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MembershipSerializer {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub ward_id: Uuid,
    pub employee_name: String,
    pub ward_name: String,
    pub created_at: DateTime<Utc>,
}

impl MembershipSerializer {
    pub fn new(membership: WardMembership, employee: &Employee, ward: &Ward) -> Self {
        Self {
            id: membership.id,
            employee_id: membership.employee_id,
            ward_id: membership.ward_id,
            employee_name: employee.name.clone(),
            ward_name: ward.name.clone(),
            created_at: membership.created_at,
        }
    }
}
