use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{Identifiable, Timestamped};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// The four raw absence-token strings the Absence Expander consumes for one
/// employee, exactly as entered upstream (comma-separated `D.M.` /
/// `DD.MM.` tokens, `-`/`–` ranges). One row per employee; an employee with
/// no recorded absences of a kind has an empty string in that field, never
/// a null.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AbsenceRaw {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub sl: String,
    pub fe: String,
    pub uw: String,
    pub w: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for AbsenceRaw {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for AbsenceRaw {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
