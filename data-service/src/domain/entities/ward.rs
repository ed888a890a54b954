use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{Identifiable, Timestamped};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A care-home ward. Wards nest (`parent_id`) so that a roster request for
/// a parent ward resolves to the union of its own direct employees and
/// every descendant ward's employees.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Ward {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for Ward {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for Ward {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// A ward together with the employees resolved for it (own members only;
/// callers aggregate across `Ward::get_descendant_ids` themselves).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WardWithMembers {
    pub ward: Ward,
    pub members: Vec<super::Employee>,
}
