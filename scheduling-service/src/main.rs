mod api;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::AppState;
use domain::repositories::{AbsenceRepo, EmployeeRepo, HolidayProvider, ScheduleJobRepository, ShiftAssignmentRepository};
use domain::roster_generator::RosterGenerator;
use domain::solver::{HighsSolver, Solver};
use infrastructure::http_client::DataServiceClient;
use infrastructure::{
    config::Settings,
    database, redis,
    repositories::{PostgresScheduleJobRepository, PostgresShiftAssignmentRepository},
    JobProcessor,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scheduling_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Scheduling Service...");

    let settings = Settings::new()?;
    tracing::info!("Configuration loaded: {:?}", settings);

    let db_pool =
        database::create_pool(&settings.database.url, settings.database.max_connections).await?;
    tracing::info!("Database connection pool created");

    database::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations completed");

    let redis_pool = redis::create_redis_pool(&settings.redis.url).await?;
    tracing::info!("Redis connection established");

    let job_repo: Arc<dyn ScheduleJobRepository> =
        Arc::new(PostgresScheduleJobRepository::new(db_pool.clone()));
    let assignment_repo: Arc<dyn ShiftAssignmentRepository> =
        Arc::new(PostgresShiftAssignmentRepository::new(db_pool.clone()));

    let data_service_client = Arc::new(DataServiceClient::new(settings.data_service.url.clone()));
    let employee_repo: Arc<dyn EmployeeRepo> = data_service_client.clone();
    let absence_repo: Arc<dyn AbsenceRepo> = data_service_client.clone();
    let holiday_provider: Arc<dyn HolidayProvider> = data_service_client;

    let solver: Arc<dyn Solver> = Arc::new(HighsSolver::new(Duration::from_secs(
        settings.solver.time_limit_seconds,
    )));

    let generator = Arc::new(RosterGenerator::new(
        employee_repo,
        absence_repo,
        holiday_provider,
        solver,
    ));

    let job_processor = Arc::new(JobProcessor::new(
        job_repo.clone(),
        assignment_repo.clone(),
        generator,
    ));
    let (schedule_sender, _job_processor_handle) = job_processor.start();

    tracing::info!("Job processor started");

    let app_state = AppState::new(job_repo, assignment_repo, schedule_sender, redis_pool);

    let app = api::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(settings.server_address()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Scheduling Service listening on {}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
