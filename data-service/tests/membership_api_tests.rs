//! Ward membership API integration tests

#[path = "common/mod.rs"]
mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{
    create_mock_redis_pool, create_sample_employee, create_sample_ward, create_test_app_state,
    MockAbsenceRepository, MockEmployeeRepository, MockMembershipRepository, MockWardRepository,
};
use data_service::api::create_router;
use serde_json::json;
use shared::Qualification;
use std::sync::Arc;
use uuid::Uuid;

async fn setup_test_server(
    employee_repo: Arc<MockEmployeeRepository>,
    ward_repo: Arc<MockWardRepository>,
) -> TestServer {
    let membership_repo = Arc::new(MockMembershipRepository::new());
    let absence_repo = Arc::new(MockAbsenceRepository::new());
    let redis_pool = create_mock_redis_pool().await;

    let state = create_test_app_state(employee_repo, ward_repo, membership_repo, absence_repo, redis_pool);
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_add_member_success() {
    let employee_id = Uuid::new_v4();
    let ward_id = Uuid::new_v4();
    let employee = create_sample_employee(employee_id, "Anna Keller", Qualification::Hf);
    let ward = create_sample_ward(ward_id, "Station A", None);

    let employee_repo = Arc::new(MockEmployeeRepository::with_employees(vec![employee]));
    let ward_repo = Arc::new(MockWardRepository::with_wards(vec![ward]));

    let server = setup_test_server(employee_repo, ward_repo).await;

    let response = server
        .post(&format!("/api/v1/wards/{}/members", ward_id))
        .json(&json!({ "employee_id": employee_id }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["employee_id"], employee_id.to_string());
    assert_eq!(body["ward_id"], ward_id.to_string());
    assert_eq!(body["employee_name"], "Anna Keller");
    assert_eq!(body["ward_name"], "Station A");
}

#[tokio::test]
async fn test_add_member_employee_not_found() {
    let ward_id = Uuid::new_v4();
    let ward = create_sample_ward(ward_id, "Station A", None);

    let employee_repo = Arc::new(MockEmployeeRepository::new());
    let ward_repo = Arc::new(MockWardRepository::with_wards(vec![ward]));

    let server = setup_test_server(employee_repo, ward_repo).await;

    let response = server
        .post(&format!("/api/v1/wards/{}/members", ward_id))
        .json(&json!({ "employee_id": Uuid::new_v4() }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_member_ward_not_found() {
    let employee_id = Uuid::new_v4();
    let employee = create_sample_employee(employee_id, "Anna Keller", Qualification::Hf);

    let employee_repo = Arc::new(MockEmployeeRepository::with_employees(vec![employee]));
    let ward_repo = Arc::new(MockWardRepository::new());

    let server = setup_test_server(employee_repo, ward_repo).await;

    let response = server
        .post(&format!("/api/v1/wards/{}/members", Uuid::new_v4()))
        .json(&json!({ "employee_id": employee_id }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remove_member_not_found() {
    let employee_repo = Arc::new(MockEmployeeRepository::new());
    let ward_repo = Arc::new(MockWardRepository::new());

    let server = setup_test_server(employee_repo, ward_repo).await;

    let response = server
        .delete(&format!(
            "/api/v1/wards/{}/members/{}",
            Uuid::new_v4(),
            Uuid::new_v4()
        ))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remove_member_success() {
    let employee_id = Uuid::new_v4();
    let ward_id = Uuid::new_v4();
    let employee = create_sample_employee(employee_id, "Anna Keller", Qualification::Hf);
    let ward = create_sample_ward(ward_id, "Station A", None);

    let employee_repo = Arc::new(MockEmployeeRepository::with_employees(vec![employee]));
    let ward_repo = Arc::new(MockWardRepository::with_wards(vec![ward]));

    let server = setup_test_server(employee_repo, ward_repo).await;

    server
        .post(&format!("/api/v1/wards/{}/members", ward_id))
        .json(&json!({ "employee_id": employee_id }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .delete(&format!("/api/v1/wards/{}/members/{}", ward_id, employee_id))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_get_ward_members() {
    let ward_id = Uuid::new_v4();
    let employee_id = Uuid::new_v4();
    let employee = create_sample_employee(employee_id, "Anna Keller", Qualification::Hf);

    let employee_repo = Arc::new(MockEmployeeRepository::with_employees(vec![employee]));
    employee_repo.assign_to_ward(employee_id, ward_id);
    let ward_repo = Arc::new(MockWardRepository::new());

    let server = setup_test_server(employee_repo, ward_repo).await;

    let response = server.get(&format!("/api/v1/wards/{}/members", ward_id)).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let members = body.as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["name"], "Anna Keller");
}

#[tokio::test]
async fn test_get_ward_members_empty() {
    let employee_repo = Arc::new(MockEmployeeRepository::new());
    let ward_repo = Arc::new(MockWardRepository::new());

    let server = setup_test_server(employee_repo, ward_repo).await;

    let response = server.get(&format!("/api/v1/wards/{}/members", Uuid::new_v4())).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body.as_array().unwrap().is_empty());
}
