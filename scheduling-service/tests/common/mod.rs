use async_trait::async_trait;
use chrono::Utc;
use scheduling_service::api::requests::ScheduleJobRequest;
use scheduling_service::api::AppState;
use scheduling_service::domain::entities::{ScheduleJob, ShiftAssignment};
use scheduling_service::domain::repositories::{ScheduleJobRepository, ShiftAssignmentRepository};
use scheduling_service::infrastructure::redis::RedisPool;
use shared::{DomainError, DomainResult, JobStatus, ShiftCode};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::mpsc;
use uuid::Uuid;

/// Manual mock implementation for `ScheduleJobRepository`.
#[derive(Default)]
pub struct MockScheduleJobRepository {
    jobs: RwLock<HashMap<Uuid, ScheduleJob>>,
}

impl MockScheduleJobRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jobs(job_list: Vec<ScheduleJob>) -> Self {
        let repo = Self::new();
        {
            let mut jobs = repo.jobs.write().unwrap();
            for job in job_list {
                jobs.insert(job.id, job);
            }
        }
        repo
    }
}

#[async_trait]
impl ScheduleJobRepository for MockScheduleJobRepository {
    async fn create(&self, job: ScheduleJob) -> DomainResult<ScheduleJob> {
        self.jobs.write().unwrap().insert(job.id, job.clone());
        Ok(job)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ScheduleJob>> {
        Ok(self.jobs.read().unwrap().get(&id).cloned())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: JobStatus,
        error_message: Option<String>,
    ) -> DomainResult<()> {
        let mut jobs = self.jobs.write().unwrap();
        if let Some(job) = jobs.get_mut(&id) {
            job.status = status;
            job.error_message = error_message;
            job.updated_at = Utc::now();
            Ok(())
        } else {
            Err(DomainError::NotFound(format!("job {id} not found")))
        }
    }

    async fn mark_completed(&self, id: Uuid, slack_report: serde_json::Value) -> DomainResult<()> {
        let mut jobs = self.jobs.write().unwrap();
        if let Some(job) = jobs.get_mut(&id) {
            job.status = JobStatus::Completed;
            job.slack_report = Some(slack_report);
            job.completed_at = Some(Utc::now());
            job.updated_at = Utc::now();
            Ok(())
        } else {
            Err(DomainError::NotFound(format!("job {id} not found")))
        }
    }

    async fn mark_failed(&self, id: Uuid, error_message: String) -> DomainResult<()> {
        let mut jobs = self.jobs.write().unwrap();
        if let Some(job) = jobs.get_mut(&id) {
            job.status = JobStatus::Failed;
            job.error_message = Some(error_message);
            job.updated_at = Utc::now();
            Ok(())
        } else {
            Err(DomainError::NotFound(format!("job {id} not found")))
        }
    }
}

/// Manual mock implementation for `ShiftAssignmentRepository`.
#[derive(Default)]
pub struct MockShiftAssignmentRepository {
    assignments: RwLock<Vec<ShiftAssignment>>,
}

impl MockShiftAssignmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assignments(assignment_list: Vec<ShiftAssignment>) -> Self {
        let repo = Self::new();
        {
            let mut assignments = repo.assignments.write().unwrap();
            *assignments = assignment_list;
        }
        repo
    }
}

#[async_trait]
impl ShiftAssignmentRepository for MockShiftAssignmentRepository {
    async fn create_batch(&self, assignments: Vec<ShiftAssignment>) -> DomainResult<()> {
        let mut current = self.assignments.write().unwrap();
        current.extend(assignments);
        Ok(())
    }

    async fn find_by_job_id(&self, job_id: Uuid) -> DomainResult<Vec<ShiftAssignment>> {
        let assignments = self.assignments.read().unwrap();
        Ok(assignments
            .iter()
            .filter(|a| a.schedule_job_id == job_id)
            .cloned()
            .collect())
    }

    async fn delete_by_job_id(&self, job_id: Uuid) -> DomainResult<()> {
        let mut assignments = self.assignments.write().unwrap();
        assignments.retain(|a| a.schedule_job_id != job_id);
        Ok(())
    }
}

/// Bundles a running test server with the receiving end of its job
/// channel, so a test can assert on what the handler would have enqueued
/// for the processor without actually running it.
pub struct TestServerWithReceiver {
    pub server: axum_test::TestServer,
    pub receiver: mpsc::Receiver<ScheduleJobRequest>,
}

/// Mock Redis pool for testing (no-op usage — none of the schedule
/// handlers read or write the cache today).
pub async fn create_mock_redis_pool() -> RedisPool {
    let client = redis::Client::open("redis://localhost:6379").unwrap();
    redis::aio::ConnectionManager::new(client).await.unwrap()
}

/// Create test app state with mock repositories and a dummy channel.
pub fn create_test_app_state(
    job_repo: Arc<dyn ScheduleJobRepository>,
    assignment_repo: Arc<dyn ShiftAssignmentRepository>,
    redis_pool: RedisPool,
) -> (AppState, mpsc::Receiver<ScheduleJobRequest>) {
    let (sender, receiver) = mpsc::channel::<ScheduleJobRequest>(100);
    let state = AppState::new(job_repo, assignment_repo, sender, redis_pool);
    (state, receiver)
}

/// Create a sample schedule job for testing.
pub fn create_sample_job(id: Uuid, ward_id: Uuid, year: i32, month: i16, status: JobStatus) -> ScheduleJob {
    let now = Utc::now();
    ScheduleJob {
        id,
        ward_id,
        year,
        month,
        status,
        error_message: None,
        slack_report: None,
        created_at: now,
        updated_at: now,
        completed_at: None,
    }
}

/// Create a sample completed job with a slack report.
pub fn create_completed_job(id: Uuid, ward_id: Uuid, year: i32, month: i16) -> ScheduleJob {
    let now = Utc::now();
    ScheduleJob {
        id,
        ward_id,
        year,
        month,
        status: JobStatus::Completed,
        error_message: None,
        slack_report: Some(serde_json::json!({ "early_coverage_shortfall": 0.0 })),
        created_at: now,
        updated_at: now,
        completed_at: Some(now),
    }
}

/// Create sample shift assignments for testing.
pub fn create_sample_assignments(
    job_id: Uuid,
    employee_ids: Vec<Uuid>,
    start_date: chrono::NaiveDate,
) -> Vec<ShiftAssignment> {
    let now = Utc::now();
    let shifts = [ShiftCode::BDienst, ShiftCode::CDienst, ShiftCode::SDienst];
    let mut assignments = Vec::new();

    for (offset, employee_id) in employee_ids.iter().enumerate() {
        for day in 0..7 {
            let date = start_date + chrono::Duration::days(day);
            let shift = shifts[(offset + day as usize) % shifts.len()];
            assignments.push(ShiftAssignment {
                id: Uuid::new_v4(),
                schedule_job_id: job_id,
                employee_id: *employee_id,
                date,
                shift,
                created_at: now,
            });
        }
    }

    assignments
}
