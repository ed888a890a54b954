pub mod collaborators;
pub mod schedule_job_repository;
pub mod shift_assignment_repository;

pub use collaborators::{
    AbsenceRepo, EmployeeInfo, EmployeeRepo, HolidayProvider, RawAbsences, ShiftCatalog,
};
pub use schedule_job_repository::ScheduleJobRepository;
pub use shift_assignment_repository::ShiftAssignmentRepository;
