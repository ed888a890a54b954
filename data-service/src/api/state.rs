use std::sync::Arc;

use crate::domain::repositories::{
    AbsenceRawRepository, EmployeeRepository, WardMembershipRepository, WardRepository,
};
use crate::infrastructure::redis::RedisPool;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub employee_repo: Arc<dyn EmployeeRepository>,
    pub ward_repo: Arc<dyn WardRepository>,
    pub membership_repo: Arc<dyn WardMembershipRepository>,
    pub absence_repo: Arc<dyn AbsenceRawRepository>,
    pub redis_pool: RedisPool,
}

impl AppState {
    pub fn new(
        employee_repo: Arc<dyn EmployeeRepository>,
        ward_repo: Arc<dyn WardRepository>,
        membership_repo: Arc<dyn WardMembershipRepository>,
        absence_repo: Arc<dyn AbsenceRawRepository>,
        redis_pool: RedisPool,
    ) -> Self {
        Self {
            employee_repo,
            ward_repo,
            membership_repo,
            absence_repo,
            redis_pool,
        }
    }
}
