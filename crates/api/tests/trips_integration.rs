//! Integration tests for trip endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    create_machine, create_test_app, create_worker, get_request, json_request, post_request, send,
};
use serde_json::json;
use uuid::Uuid;

async fn start_trip(app: &axum::Router, worker_id: &str, machine_id: &str) -> String {
    let (status, body) = send(
        app,
        json_request(
            Method::POST,
            "/api/trip/start",
            json!({
                "workerId": worker_id,
                "machineId": machine_id,
                "location": { "latitude": 6.9271, "longitude": 79.8612 }
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "trip start failed: {}", body);
    assert_eq!(body["message"], "Trip started");
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_start_trip() {
    let app = create_test_app();
    let machine_id = create_machine(&app).await;
    let worker_id = create_worker(&app).await;

    let trip_id = start_trip(&app, &worker_id, &machine_id).await;

    let (status, trip) = send(&app, get_request(&format!("/api/trip/{}", trip_id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(trip["worker"], worker_id);
    assert_eq!(trip["machine"], machine_id);
    assert_eq!(trip["duration"], 0);
    assert_eq!(trip["status"], "In Progress");
    assert!(trip["startTime"].is_string());
    assert!(trip["endTime"].is_null());
    assert_eq!(trip["location"]["longitude"], 79.8612);
}

#[tokio::test]
async fn test_start_trip_ignores_client_duration() {
    let app = create_test_app();
    let machine_id = create_machine(&app).await;
    let worker_id = create_worker(&app).await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/trip/start",
            json!({
                "workerId": worker_id,
                "machineId": machine_id,
                "location": { "latitude": 6.9, "longitude": 79.8 },
                "duration": 45,
                "status": "Completed"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, trip) = send(
        &app,
        get_request(&format!("/api/trip/{}", body["id"].as_str().unwrap())),
    )
    .await;
    assert_eq!(trip["duration"], 0);
    assert_eq!(trip["status"], "In Progress");
}

#[tokio::test]
async fn test_start_trip_unknown_worker() {
    let app = create_test_app();
    let machine_id = create_machine(&app).await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/trip/start",
            json!({
                "workerId": Uuid::new_v4(),
                "machineId": machine_id,
                "location": { "latitude": 6.9, "longitude": 79.8 }
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_start_trip_unknown_machine() {
    let app = create_test_app();
    let worker_id = create_worker(&app).await;

    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/trip/start",
            json!({
                "workerId": worker_id,
                "machineId": Uuid::new_v4(),
                "location": { "latitude": 6.9, "longitude": 79.8 }
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_start_trip_requires_location() {
    let app = create_test_app();
    let machine_id = create_machine(&app).await;
    let worker_id = create_worker(&app).await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/trip/start",
            json!({ "workerId": worker_id, "machineId": machine_id }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_complete_trip() {
    let app = create_test_app();
    let machine_id = create_machine(&app).await;
    let worker_id = create_worker(&app).await;
    let trip_id = start_trip(&app, &worker_id, &machine_id).await;

    let (status, trip) = send(&app, post_request(&format!("/api/trip/{}/complete", trip_id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(trip["status"], "Completed");
    assert!(trip["endTime"].is_string());
    // Completed within the same minute it started
    assert_eq!(trip["duration"], 0);

    let (status, body) = send(&app, post_request(&format!("/api/trip/{}/complete", trip_id))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");
}

#[tokio::test]
async fn test_get_trip_not_found() {
    let app = create_test_app();
    let (status, _) = send(&app, get_request(&format!("/api/trip/{}", Uuid::new_v4()))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
