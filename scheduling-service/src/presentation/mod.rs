pub mod schedule_serializer;

pub use schedule_serializer::{
    ScheduleJobSerialize, ScheduleResultSerialize, ScheduleStatusSerialize,
    ShiftAssignmentSerialize,
};
