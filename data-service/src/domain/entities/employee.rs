use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{Identifiable, Qualification, Timestamped};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// An employee of the ward, as known to the roster optimizer's
/// collaborator layer. `target_workdays` and `pensum` are display/input
/// fields only — the solver reads `target_workdays` but never `pensum`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub qualification: Qualification,
    pub target_workdays: i32,
    pub pensum: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for Employee {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for Employee {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
