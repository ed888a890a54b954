use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Qualification held by an employee. Drawn from a closed set; anything
/// else is rejected by apprentice/Leitung-specific rules upstream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "qualification", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Qualification {
    Leitung,
    Hf,
    Ph,
    Ausbildung1,
    Ausbildung2,
}

impl Qualification {
    /// Fach = {Leitung, HF}.
    pub fn is_fach(self) -> bool {
        matches!(self, Qualification::Leitung | Qualification::Hf)
    }

    /// Non-Fach = {PH, Ausbildung 1, Ausbildung 2}.
    pub fn is_non_fach(self) -> bool {
        !self.is_fach()
    }

    /// Apprentice = {Ausbildung 1, Ausbildung 2}.
    pub fn is_apprentice(self) -> bool {
        matches!(self, Qualification::Ausbildung1 | Qualification::Ausbildung2)
    }
}

/// Category a shift code belongs to for daily-coverage purposes. Split
/// shifts count toward both early and late coverage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftCategory {
    Early,
    Late,
    Split,
    Office,
}

/// Closed set of assignable shift codes, plus the `Bü Dienst` pseudo-code
/// produced by the office-shift decision variable `y[e,d]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "shift_code", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftCode {
    BDienst,
    CDienst,
    VsDienst,
    SDienst,
    BsDienst,
    C4Dienst,
    BueDienst,
}

impl ShiftCode {
    /// Every assignable code, in a stable, deterministic order. `BueDienst`
    /// is intentionally excluded — it is never a member of the `x`
    /// variable set, only the pseudo-code attached to `y`.
    pub const ASSIGNABLE: [ShiftCode; 6] = [
        ShiftCode::BDienst,
        ShiftCode::CDienst,
        ShiftCode::VsDienst,
        ShiftCode::SDienst,
        ShiftCode::BsDienst,
        ShiftCode::C4Dienst,
    ];

    pub fn category(self) -> ShiftCategory {
        match self {
            ShiftCode::BDienst | ShiftCode::CDienst => ShiftCategory::Early,
            ShiftCode::VsDienst | ShiftCode::SDienst => ShiftCategory::Late,
            ShiftCode::BsDienst | ShiftCode::C4Dienst => ShiftCategory::Split,
            ShiftCode::BueDienst => ShiftCategory::Office,
        }
    }

    pub fn is_early(self) -> bool {
        matches!(self.category(), ShiftCategory::Early | ShiftCategory::Split)
    }

    pub fn is_late(self) -> bool {
        matches!(self.category(), ShiftCategory::Late | ShiftCategory::Split)
    }

    pub fn code(self) -> &'static str {
        match self {
            ShiftCode::BDienst => "B Dienst",
            ShiftCode::CDienst => "C Dienst",
            ShiftCode::VsDienst => "VS Dienst",
            ShiftCode::SDienst => "S Dienst",
            ShiftCode::BsDienst => "BS Dienst",
            ShiftCode::C4Dienst => "C4 Dienst",
            ShiftCode::BueDienst => "Bü Dienst",
        }
    }
}

/// Absence kinds, not assignable by the solver — pre-occupied slots
/// removed from the decision space. Only `Fe` and `Sl` credit the
/// workload target; the rest do not.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "absence_kind", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AbsenceKind {
    /// Schule (school)
    Sl,
    /// Ferien (vacation)
    Fe,
    /// Unbezahlt (unpaid)
    Uw,
    /// Wunschfrei (requested day off)
    W,
    /// Free (unspecified)
    X,
    /// Krankheit (sick)
    Kr,
    /// Interne Weiterbildung (training)
    Iw,
}

impl AbsenceKind {
    /// Only `Fe` and `Sl` count as worked days for workload accounting.
    pub fn credits_workload(self) -> bool {
        matches!(self, AbsenceKind::Fe | AbsenceKind::Sl)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "job_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

pub trait Timestamped {
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
}

pub trait Identifiable {
    fn id(&self) -> Uuid;
}
