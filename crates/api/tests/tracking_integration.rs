//! Integration tests for tracking code endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    create_booking, create_test_app, fake_booking, generate_tracking_code, get_request,
    json_request, post_request, send,
};
use serde_json::json;
use tokio_test::assert_ok;
use uuid::Uuid;

#[tokio::test]
async fn test_generate_and_lookup_tracking_code() {
    let app = create_test_app();
    let booking_id = create_booking(&app, fake_booking()).await;

    let code = generate_tracking_code(&app, &booking_id).await;
    assert_eq!(code.len(), 8);
    assert!(code
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));

    let (status, record) = send(&app, get_request(&format!("/api/tracking/{}", code))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["code"], code);
    assert_eq!(record["bookingId"], booking_id);
    assert_eq!(record["status"], "Active");
    assert_eq!(record["startDate"], "2024-06-01T00:00:00Z");
    assert_eq!(record["endDate"], "2024-06-30T00:00:00Z");
}

#[tokio::test]
async fn test_codes_are_distinct_per_request() {
    let app = create_test_app();
    let booking_id = create_booking(&app, fake_booking()).await;

    let first = generate_tracking_code(&app, &booking_id).await;
    let second = generate_tracking_code(&app, &booking_id).await;
    assert_ne!(first, second);

    for code in [&first, &second] {
        let (status, _) = send(&app, get_request(&format!("/api/tracking/{}", code))).await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_unknown_tracking_code() {
    let app = create_test_app();
    let (status, body) = send(&app, get_request("/api/tracking/zzzzzzzz")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "Invalid tracking code");
}

#[tokio::test]
async fn test_malformed_tracking_code_is_not_found() {
    let app = create_test_app();
    let (status, _) = send(&app, get_request("/api/tracking/ABC")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_lookup_is_case_sensitive() {
    let app = create_test_app();
    let booking_id = create_booking(&app, fake_booking()).await;
    let code = generate_tracking_code(&app, &booking_id).await;

    // Codes are lowercase; an all-digit code has no uppercase variant
    if code.chars().any(|c| c.is_ascii_lowercase()) {
        let (status, _) = send(
            &app,
            get_request(&format!("/api/tracking/{}", code.to_ascii_uppercase())),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_generate_for_unknown_booking() {
    let app = create_test_app();
    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/tracking/generate",
            json!({
                "bookingId": Uuid::new_v4(),
                "startDate": "2024-06-01T00:00:00Z",
                "endDate": "2024-06-30T00:00:00Z"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Booking not found");
}

#[tokio::test]
async fn test_generate_with_inverted_window() {
    let app = create_test_app();
    let booking_id = create_booking(&app, fake_booking()).await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/tracking/generate",
            json!({
                "bookingId": booking_id,
                "startDate": "2024-06-30T00:00:00Z",
                "endDate": "2024-06-01T00:00:00Z"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_generate_with_invalid_date() {
    let app = create_test_app();
    let booking_id = create_booking(&app, fake_booking()).await;

    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/tracking/generate",
            json!({
                "bookingId": booking_id,
                "startDate": "next tuesday",
                "endDate": "2024-06-01T00:00:00Z"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_expired_code_is_hidden() {
    let app = create_test_app();
    let booking_id = create_booking(&app, fake_booking()).await;
    let code = generate_tracking_code(&app, &booking_id).await;

    let (status, record) =
        send(&app, post_request(&format!("/api/tracking/{}/expire", code))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["status"], "Expired");

    let (status, _) = send(&app, get_request(&format!("/api/tracking/{}", code))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) =
        send(&app, post_request(&format!("/api/tracking/{}/expire", code))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");
}

#[tokio::test]
async fn test_expire_unknown_code() {
    let app = create_test_app();
    let (status, _) = send(&app, post_request("/api/tracking/abcd1234/expire")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_tracking_code_survives_booking_confirmation() {
    let app = create_test_app();
    let booking_id = create_booking(&app, fake_booking()).await;
    let code = generate_tracking_code(&app, &booking_id).await;

    let (status, _) = send(
        &app,
        post_request(&format!("/api/bookings/{}/confirm", booking_id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let response = tower::ServiceExt::oneshot(
        app.clone(),
        get_request(&format!("/api/tracking/{}", code)),
    )
    .await;
    let response = assert_ok!(response);
    assert_eq!(response.status(), StatusCode::OK);
}
