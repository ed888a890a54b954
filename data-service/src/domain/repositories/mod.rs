pub mod absence_raw_repository;
pub mod employee_repository;
pub mod ward_membership_repository;
pub mod ward_repository;

pub use absence_raw_repository::AbsenceRawRepository;
pub use employee_repository::EmployeeRepository;
pub use ward_membership_repository::WardMembershipRepository;
pub use ward_repository::WardRepository;
