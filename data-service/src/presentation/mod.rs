pub mod absence;
pub mod employee;
pub mod membership;
pub mod ward;

pub use absence::AbsenceRawSerializer;
pub use employee::EmployeeSerializer;
pub use membership::MembershipSerializer;
pub use ward::{ResolvedWardSerializer, WardSerializer};
