use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{DomainResult, Qualification, ShiftCode};
use uuid::Uuid;

/// One employee as seen by the roster generator — only the fields the
/// solver's variable builder and constraints actually reason over.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeInfo {
    pub id: Uuid,
    pub name: String,
    pub qualification: Qualification,
    pub target_workdays: i32,
    pub pensum: i16,
}

/// Resolved ward membership: every employee assignable to a ward's roster,
/// including descendants of sub-wards.
#[async_trait]
pub trait EmployeeRepo: Send + Sync {
    async fn list(&self, ward_id: Uuid) -> DomainResult<Vec<EmployeeInfo>>;
}

/// Raw, unexpanded absence strings per employee and kind, exactly as
/// stored by the data service (`sl`/`fe`/`uw`/`w` token lists).
#[derive(Debug, Clone, Default)]
pub struct RawAbsences {
    pub sl: String,
    pub fe: String,
    pub uw: String,
    pub w: String,
}

#[async_trait]
pub trait AbsenceRepo: Send + Sync {
    async fn raw_strings(&self, employee_id: Uuid) -> DomainResult<RawAbsences>;
}

/// The closed set of assignable shift codes, as published by the data
/// service. Queried once per run rather than hard-coded, so a future
/// catalog change does not require a recompile of the solver.
#[async_trait]
pub trait ShiftCatalog: Send + Sync {
    async fn codes(&self) -> DomainResult<Vec<ShiftCode>>;
}

#[async_trait]
pub trait HolidayProvider: Send + Sync {
    async fn is_holiday(&self, date: NaiveDate) -> DomainResult<bool>;
}
