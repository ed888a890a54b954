pub mod postgres_absence_raw_repository;
pub mod postgres_employee_repository;
pub mod postgres_ward_membership_repository;
pub mod postgres_ward_repository;

pub use postgres_absence_raw_repository::PostgresAbsenceRawRepository;
pub use postgres_employee_repository::PostgresEmployeeRepository;
pub use postgres_ward_membership_repository::PostgresWardMembershipRepository;
pub use postgres_ward_repository::PostgresWardRepository;
