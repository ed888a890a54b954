use std::sync::Arc;

use shared::{DomainResult, JobStatus};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::api::requests::ScheduleJobRequest;
use crate::domain::repositories::{ScheduleJobRepository, ShiftAssignmentRepository};
use crate::domain::roster_generator::RosterGenerator;

/// Drains the schedule-submission channel and runs each job through the
/// roster generator, persisting the result or the failure reason.
pub struct JobProcessor {
    job_repo: Arc<dyn ScheduleJobRepository>,
    assignment_repo: Arc<dyn ShiftAssignmentRepository>,
    generator: Arc<RosterGenerator>,
}

impl JobProcessor {
    pub fn new(
        job_repo: Arc<dyn ScheduleJobRepository>,
        assignment_repo: Arc<dyn ShiftAssignmentRepository>,
        generator: Arc<RosterGenerator>,
    ) -> Self {
        Self {
            job_repo,
            assignment_repo,
            generator,
        }
    }

    pub fn start(
        self: Arc<Self>,
    ) -> (
        mpsc::Sender<ScheduleJobRequest>,
        tokio::task::JoinHandle<()>,
    ) {
        let (tx, mut rx) = mpsc::channel::<ScheduleJobRequest>(100);

        let handle = tokio::spawn(async move {
            while let Some(request) = rx.recv().await {
                if let Err(e) = self.process_job(request).await {
                    tracing::error!("failed to process schedule job: {:?}", e);
                }
            }
        });

        (tx, handle)
    }

    async fn process_job(&self, request: ScheduleJobRequest) -> DomainResult<()> {
        tracing::info!("processing schedule job {}", request.job_id);

        self.job_repo
            .update_status(request.job_id, JobStatus::Processing, None)
            .await?;

        match self.execute_scheduling(&request).await {
            Ok(slack_report) => {
                self.job_repo
                    .mark_completed(request.job_id, slack_report)
                    .await?;
                tracing::info!("completed job {}", request.job_id);
                Ok(())
            }
            Err(e) => {
                let error_message = e.to_string();
                self.job_repo
                    .mark_failed(request.job_id, error_message.clone())
                    .await?;
                tracing::error!("job {} failed: {}", request.job_id, error_message);
                Err(e)
            }
        }
    }

    async fn execute_scheduling(&self, request: &ScheduleJobRequest) -> DomainResult<serde_json::Value> {
        let roster = self
            .generator
            .generate(request.ward_id, request.year, request.month)
            .await?;

        tracing::info!("generated {} shift assignments", roster.assignments.len());

        let assignments: Vec<crate::domain::entities::ShiftAssignment> = roster
            .assignments
            .iter()
            .map(|(&(employee_id, date), &shift)| crate::domain::entities::ShiftAssignment {
                id: Uuid::new_v4(),
                schedule_job_id: request.job_id,
                employee_id,
                date,
                shift,
                created_at: chrono::Utc::now(),
            })
            .collect();

        self.assignment_repo.delete_by_job_id(request.job_id).await?;
        self.assignment_repo.create_batch(assignments).await?;

        serde_json::to_value(&roster.slack_report)
            .map_err(|e| shared::DomainError::InternalError(e.to_string()))
    }
}
