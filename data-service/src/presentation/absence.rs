use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::entities::AbsenceRaw;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AbsenceRawSerializer {
    pub employee_id: Uuid,
    pub sl: String,
    pub fe: String,
    pub uw: String,
    pub w: String,
    pub updated_at: DateTime<Utc>,
}

impl From<AbsenceRaw> for AbsenceRawSerializer {
    fn from(raw: AbsenceRaw) -> Self {
        Self {
            employee_id: raw.employee_id,
            sl: raw.sl,
            fe: raw.fe,
            uw: raw.uw,
            w: raw.w,
            updated_at: raw.updated_at,
        }
    }
}
