//! Employee and absence API integration tests

#[path = "common/mod.rs"]
mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{
    create_mock_redis_pool, create_sample_employee, create_test_app_state, MockAbsenceRepository,
    MockEmployeeRepository, MockMembershipRepository, MockWardRepository,
};
use data_service::api::create_router;
use serde_json::json;
use shared::Qualification;
use std::sync::Arc;
use uuid::Uuid;

async fn setup_test_server_with_employees(employee_list: Vec<data_service::domain::entities::Employee>) -> TestServer {
    let employee_repo = Arc::new(MockEmployeeRepository::with_employees(employee_list));
    let ward_repo = Arc::new(MockWardRepository::new());
    let membership_repo = Arc::new(MockMembershipRepository::new());
    let absence_repo = Arc::new(MockAbsenceRepository::new());
    let redis_pool = create_mock_redis_pool().await;

    let state = create_test_app_state(employee_repo, ward_repo, membership_repo, absence_repo, redis_pool);
    TestServer::new(create_router(state)).unwrap()
}

async fn setup_empty_test_server() -> TestServer {
    setup_test_server_with_employees(vec![]).await
}

#[tokio::test]
async fn test_create_employee_success() {
    let server = setup_empty_test_server().await;

    let request_body = json!({
        "name": "Anna Keller",
        "qualification": "HF",
        "target_workdays": 20,
        "pensum": 100
    });

    let response = server.post("/api/v1/employees").json(&request_body).await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Employee created successfully");
    assert_eq!(body["data"]["name"], "Anna Keller");
    assert_eq!(body["data"]["qualification"], "HF");
}

#[tokio::test]
async fn test_get_employee_by_id_success() {
    let employee_id = Uuid::new_v4();
    let employee = create_sample_employee(employee_id, "Max Huber", Qualification::Leitung);
    let server = setup_test_server_with_employees(vec![employee]).await;

    let response = server
        .get(&format!("/api/v1/employees/{}", employee_id))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["id"], employee_id.to_string());
    assert_eq!(body["data"]["name"], "Max Huber");
}

#[tokio::test]
async fn test_get_employee_by_id_not_found() {
    let server = setup_empty_test_server().await;
    let non_existent_id = Uuid::new_v4();

    let response = server
        .get(&format!("/api/v1/employees/{}", non_existent_id))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_employees() {
    let employees = vec![
        create_sample_employee(Uuid::new_v4(), "Employee One", Qualification::Hf),
        create_sample_employee(Uuid::new_v4(), "Employee Two", Qualification::Ausbildung1),
    ];
    let server = setup_test_server_with_employees(employees).await;

    let response = server.get("/api/v1/employees").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_employee_success() {
    let employee_id = Uuid::new_v4();
    let employee = create_sample_employee(employee_id, "Lea Fischer", Qualification::Ph);
    let server = setup_test_server_with_employees(vec![employee]).await;

    let request_body = json!({ "target_workdays": 18 });

    let response = server
        .put(&format!("/api/v1/employees/{}", employee_id))
        .json(&request_body)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["target_workdays"], 18);
    assert_eq!(body["data"]["name"], "Lea Fischer");
}

#[tokio::test]
async fn test_update_employee_not_found() {
    let server = setup_empty_test_server().await;
    let non_existent_id = Uuid::new_v4();

    let response = server
        .put(&format!("/api/v1/employees/{}", non_existent_id))
        .json(&json!({ "name": "Nobody" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_employee_success() {
    let employee_id = Uuid::new_v4();
    let employee = create_sample_employee(employee_id, "Tobias Meier", Qualification::Ausbildung2);
    let server = setup_test_server_with_employees(vec![employee]).await;

    let response = server
        .delete(&format!("/api/v1/employees/{}", employee_id))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);

    let follow_up = server
        .get(&format!("/api/v1/employees/{}", employee_id))
        .await;
    follow_up.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_employee_not_found() {
    let server = setup_empty_test_server().await;
    let non_existent_id = Uuid::new_v4();

    let response = server
        .delete(&format!("/api/v1/employees/{}", non_existent_id))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_absences_defaults_to_empty_record() {
    let employee_id = Uuid::new_v4();
    let server = setup_empty_test_server().await;

    let response = server
        .get(&format!("/api/v1/employees/{}/absences", employee_id))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["employee_id"], employee_id.to_string());
    assert_eq!(body["data"]["sl"], "");
    assert_eq!(body["data"]["fe"], "");
}

#[tokio::test]
async fn test_upsert_then_get_absences() {
    let employee_id = Uuid::new_v4();
    let server = setup_empty_test_server().await;

    let upsert_body = json!({ "sl": "3.1.-5.1.", "fe": "12.2." });
    let upsert_response = server
        .put(&format!("/api/v1/employees/{}/absences", employee_id))
        .json(&upsert_body)
        .await;

    upsert_response.assert_status_ok();
    let upsert_json: serde_json::Value = upsert_response.json();
    assert_eq!(upsert_json["data"]["sl"], "3.1.-5.1.");
    assert_eq!(upsert_json["data"]["fe"], "12.2.");
    assert_eq!(upsert_json["data"]["uw"], "");

    let get_response = server
        .get(&format!("/api/v1/employees/{}/absences", employee_id))
        .await;
    get_response.assert_status_ok();
    let get_json: serde_json::Value = get_response.json();
    assert_eq!(get_json["data"]["sl"], "3.1.-5.1.");
}

#[tokio::test]
async fn test_delete_absences() {
    let employee_id = Uuid::new_v4();
    let server = setup_empty_test_server().await;

    server
        .put(&format!("/api/v1/employees/{}/absences", employee_id))
        .json(&json!({ "w": "1.1." }))
        .await
        .assert_status_ok();

    let delete_response = server
        .delete(&format!("/api/v1/employees/{}/absences", employee_id))
        .await;
    delete_response.assert_status(StatusCode::NO_CONTENT);

    let get_response = server
        .get(&format!("/api/v1/employees/{}/absences", employee_id))
        .await;
    get_response.assert_status_ok();
    let get_json: serde_json::Value = get_response.json();
    assert_eq!(get_json["data"]["w"], "");
}
