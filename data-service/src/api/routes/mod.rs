use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{handlers, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Data Service API",
        version = "1.0.0",
        description = "Employee, ward and absence collaborator API for the roster optimizer, with Redis caching"
    ),
    paths(
        // Employee endpoints
        handlers::employee_handlers::create_employee,
        handlers::employee_handlers::get_employee_by_id,
        handlers::employee_handlers::list_employees,
        handlers::employee_handlers::update_employee,
        handlers::employee_handlers::delete_employee,
        // Ward endpoints
        handlers::ward_handlers::create_ward,
        handlers::ward_handlers::get_ward_by_id,
        handlers::ward_handlers::list_wards,
        handlers::ward_handlers::update_ward,
        handlers::ward_handlers::delete_ward,
        handlers::ward_handlers::get_resolved_members,
        // Membership endpoints
        handlers::membership_handlers::add_member,
        handlers::membership_handlers::remove_member,
        handlers::membership_handlers::get_ward_members,
        // Absence endpoints
        handlers::absence_handlers::get_absences,
        handlers::absence_handlers::upsert_absences,
        handlers::absence_handlers::delete_absences,
        // Shift catalog
        handlers::catalog_handlers::list_shift_catalog,
        // Holidays
        handlers::holiday_handlers::check_holiday,
        // Batch import endpoints
        handlers::batch_handlers::batch_import_employees,
        handlers::batch_handlers::batch_import_memberships,
    ),
    components(schemas(
        // Shared types
        shared::Qualification,
        shared::ShiftCode,
        shared::PaginationParams,
        // Employee schemas
        crate::presentation::EmployeeSerializer,
        crate::api::requests::CreateEmployeeRequest,
        crate::api::requests::UpdateEmployeeRequest,
        crate::api::requests::BatchImportEmployeesRequest,
        // Ward schemas
        crate::presentation::WardSerializer,
        crate::presentation::ResolvedWardSerializer,
        crate::api::requests::CreateWardRequest,
        crate::api::requests::UpdateWardRequest,
        // Membership schemas
        crate::presentation::MembershipSerializer,
        crate::api::requests::AddMemberRequest,
        crate::api::requests::BatchImportMembershipsRequest,
        // Absence schemas
        crate::presentation::AbsenceRawSerializer,
        crate::api::requests::UpsertAbsenceRawRequest,
        // Shift catalog / holiday schemas
        crate::api::handlers::catalog_handlers::ShiftCatalogEntrySerializer,
        crate::api::handlers::holiday_handlers::HolidayCheckSerializer,
        // Batch import schemas
        crate::api::handlers::batch_handlers::BatchImportSerializer,
    )),
    tags(
        (name = "employees", description = "Employee directory endpoints"),
        (name = "wards", description = "Ward management endpoints"),
        (name = "memberships", description = "Ward membership management endpoints"),
        (name = "absences", description = "Raw absence-token endpoints"),
        (name = "shift-catalog", description = "Compiled-in shift catalog"),
        (name = "holidays", description = "Fixed-date public holiday lookup"),
        (name = "batch", description = "Batch import endpoints")
    )
)]
struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    let employee_routes = Router::new()
        .route(
            "/employees",
            post(handlers::employee_handlers::create_employee),
        )
        .route(
            "/employees",
            get(handlers::employee_handlers::list_employees),
        )
        .route(
            "/employees/:id",
            get(handlers::employee_handlers::get_employee_by_id),
        )
        .route(
            "/employees/:id",
            put(handlers::employee_handlers::update_employee),
        )
        .route(
            "/employees/:id",
            delete(handlers::employee_handlers::delete_employee),
        )
        .route(
            "/employees/:id/absences",
            get(handlers::absence_handlers::get_absences),
        )
        .route(
            "/employees/:id/absences",
            put(handlers::absence_handlers::upsert_absences),
        )
        .route(
            "/employees/:id/absences",
            delete(handlers::absence_handlers::delete_absences),
        );

    let ward_routes = Router::new()
        .route("/wards", post(handlers::ward_handlers::create_ward))
        .route("/wards", get(handlers::ward_handlers::list_wards))
        .route("/wards/:id", get(handlers::ward_handlers::get_ward_by_id))
        .route("/wards/:id", put(handlers::ward_handlers::update_ward))
        .route("/wards/:id", delete(handlers::ward_handlers::delete_ward))
        .route(
            "/wards/:id/resolved-members",
            get(handlers::ward_handlers::get_resolved_members),
        );

    let membership_routes = Router::new()
        .route(
            "/wards/:ward_id/members",
            post(handlers::membership_handlers::add_member),
        )
        .route(
            "/wards/:ward_id/members",
            get(handlers::membership_handlers::get_ward_members),
        )
        .route(
            "/wards/:ward_id/members/:employee_id",
            delete(handlers::membership_handlers::remove_member),
        );

    let catalog_routes = Router::new()
        .route(
            "/shift-catalog",
            get(handlers::catalog_handlers::list_shift_catalog),
        )
        .route(
            "/holidays/check",
            get(handlers::holiday_handlers::check_holiday),
        );

    let batch_routes = Router::new()
        .route(
            "/batch/employees",
            post(handlers::batch_handlers::batch_import_employees),
        )
        .route(
            "/batch/memberships",
            post(handlers::batch_handlers::batch_import_memberships),
        );

    let api_router = Router::new()
        .route("/health", get(handlers::health_check))
        .merge(employee_routes)
        .merge(ward_routes)
        .merge(membership_routes)
        .merge(catalog_routes)
        .merge(batch_routes);

    Router::new()
        .nest("/api/v1", api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
