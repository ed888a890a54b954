pub mod absence_raw;
pub mod employee;
pub mod ward;
pub mod ward_membership;

pub use absence_raw::AbsenceRaw;
pub use employee::Employee;
pub use ward::{Ward, WardWithMembers};
pub use ward_membership::WardMembership;
