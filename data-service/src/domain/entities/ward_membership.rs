use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WardMembership {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub ward_id: Uuid,
    pub created_at: DateTime<Utc>,
}
