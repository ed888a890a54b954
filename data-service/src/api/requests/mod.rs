pub mod absence_request;
pub mod employee_request;
pub mod membership_request;
pub mod ward_request;

pub use absence_request::UpsertAbsenceRawRequest;
pub use employee_request::{
    BatchImportEmployeesRequest, CreateEmployeeRequest, UpdateEmployeeRequest,
};
pub use membership_request::{AddMemberRequest, BatchImportMembershipsRequest};
pub use ward_request::{CreateWardRequest, UpdateWardRequest};
