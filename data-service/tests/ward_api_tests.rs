//! Ward API integration tests

#[path = "common/mod.rs"]
mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{
    create_mock_redis_pool, create_sample_employee, create_sample_ward, create_test_app_state,
    MockAbsenceRepository, MockEmployeeRepository, MockMembershipRepository, MockWardRepository,
};
use data_service::api::create_router;
use data_service::domain::entities::WardWithMembers;
use serde_json::json;
use shared::Qualification;
use std::sync::Arc;
use uuid::Uuid;

async fn setup_test_server(ward_repo: Arc<MockWardRepository>) -> TestServer {
    let employee_repo = Arc::new(MockEmployeeRepository::new());
    let membership_repo = Arc::new(MockMembershipRepository::new());
    let absence_repo = Arc::new(MockAbsenceRepository::new());
    let redis_pool = create_mock_redis_pool().await;

    let state = create_test_app_state(employee_repo, ward_repo, membership_repo, absence_repo, redis_pool);
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_create_ward_success() {
    let server = setup_test_server(Arc::new(MockWardRepository::new())).await;

    let request_body = json!({ "name": "Station A", "parent_id": null });
    let response = server.post("/api/v1/wards").json(&request_body).await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["name"], "Station A");
    assert!(body["data"]["parent_id"].is_null());
}

#[tokio::test]
async fn test_get_ward_by_id_includes_parent_name() {
    let parent_id = Uuid::new_v4();
    let child_id = Uuid::new_v4();
    let parent = create_sample_ward(parent_id, "Division West", None);
    let child = create_sample_ward(child_id, "Station A", Some(parent_id));
    let ward_repo = Arc::new(MockWardRepository::with_wards(vec![parent, child]));

    let server = setup_test_server(ward_repo).await;

    let response = server.get(&format!("/api/v1/wards/{}", child_id)).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["name"], "Station A");
    assert_eq!(body["data"]["parent_name"], "Division West");
}

#[tokio::test]
async fn test_get_ward_by_id_not_found() {
    let server = setup_test_server(Arc::new(MockWardRepository::new())).await;
    let non_existent_id = Uuid::new_v4();

    let response = server.get(&format!("/api/v1/wards/{}", non_existent_id)).await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_wards() {
    let wards = vec![
        create_sample_ward(Uuid::new_v4(), "Station A", None),
        create_sample_ward(Uuid::new_v4(), "Station B", None),
    ];
    let ward_repo = Arc::new(MockWardRepository::with_wards(wards));

    let server = setup_test_server(ward_repo).await;

    let response = server.get("/api/v1/wards").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_update_ward_invalidates_cache_and_returns_updated() {
    let ward_id = Uuid::new_v4();
    let ward = create_sample_ward(ward_id, "Station A", None);
    let ward_repo = Arc::new(MockWardRepository::with_wards(vec![ward]));

    let server = setup_test_server(ward_repo).await;

    let response = server
        .put(&format!("/api/v1/wards/{}", ward_id))
        .json(&json!({ "name": "Station A Renamed" }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["name"], "Station A Renamed");
}

#[tokio::test]
async fn test_delete_ward_success() {
    let ward_id = Uuid::new_v4();
    let ward = create_sample_ward(ward_id, "Station A", None);
    let ward_repo = Arc::new(MockWardRepository::with_wards(vec![ward]));

    let server = setup_test_server(ward_repo).await;

    let response = server.delete(&format!("/api/v1/wards/{}", ward_id)).await;
    response.assert_status(StatusCode::NO_CONTENT);

    let follow_up = server.get(&format!("/api/v1/wards/{}", ward_id)).await;
    follow_up.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_resolved_members_groups_by_ward() {
    let ward_id = Uuid::new_v4();
    let child_ward_id = Uuid::new_v4();
    let ward = create_sample_ward(ward_id, "Division West", None);

    let ward_repo = Arc::new(MockWardRepository::with_wards(vec![ward]));

    let employee = create_sample_employee(Uuid::new_v4(), "Anna Keller", Qualification::Hf);
    ward_repo.stub_resolved_members(
        ward_id,
        vec![
            WardWithMembers {
                ward: create_sample_ward(ward_id, "Division West", None),
                members: vec![employee.clone()],
            },
            WardWithMembers {
                ward: create_sample_ward(child_ward_id, "Station A", Some(ward_id)),
                members: vec![],
            },
        ],
        1,
    );

    let server = setup_test_server(ward_repo).await;

    let response = server
        .get(&format!("/api/v1/wards/{}/resolved-members", ward_id))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total"], 1);
    let groups = body["data"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["ward_name"], "Division West");
    assert_eq!(groups[0]["members"][0]["name"], "Anna Keller");
}

#[tokio::test]
async fn test_resolved_members_ward_not_found() {
    let server = setup_test_server(Arc::new(MockWardRepository::new())).await;
    let non_existent_id = Uuid::new_v4();

    let response = server
        .get(&format!("/api/v1/wards/{}/resolved-members", non_existent_id))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
