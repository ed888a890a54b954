pub mod schedule_request;

pub use schedule_request::{CreateScheduleRequest, ScheduleJobRequest};
