//! Trip endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use persistence::repositories::{TripCompletion, TripInput};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{ApiJson, IdPath};
use crate::middleware::metrics::{record_trip_completed, record_trip_started};
use domain::models::trip::{duration_minutes, StartTripRequest};
use domain::models::{MessageResponse, Trip, TripStatus};

/// Start a trip for a worker carrying a machine.
///
/// POST /api/trip/start
///
/// The start time is stamped by the server. Returns 404 if the worker or
/// machine does not exist.
pub async fn start_trip(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<StartTripRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    request.validate()?;

    state
        .store
        .find_worker(request.worker_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Worker not found".to_string()))?;

    state
        .store
        .find_machine(request.machine_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Machine not found".to_string()))?;

    let input = TripInput {
        worker_id: request.worker_id,
        machine_id: request.machine_id,
        start_time: Utc::now(),
        location: Some(request.location),
    };

    let trip = state.store.insert_trip(input).await?;
    record_trip_started();

    info!(
        trip_id = %trip.id,
        worker_id = %trip.worker,
        machine_id = %trip.machine,
        "Trip started"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("Trip started", trip.id)),
    ))
}

/// GET /api/trip/:id
pub async fn get_trip(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Trip>, ApiError> {
    state
        .store
        .find_trip(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Trip not found".to_string()))
}

/// Close an in-progress trip.
///
/// POST /api/trip/:id/complete
///
/// Sets the end time to now and the duration to whole elapsed minutes.
/// Returns 409 if the trip is already completed.
pub async fn complete_trip(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Trip>, ApiError> {
    let trip = state
        .store
        .find_trip(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Trip not found".to_string()))?;

    if !trip.status.can_transition_to(TripStatus::Completed) {
        return Err(ApiError::Conflict(format!("Trip is already {}", trip.status)));
    }

    let end_time = Utc::now();
    let completion = TripCompletion {
        end_time,
        duration_minutes: duration_minutes(trip.start_time, end_time),
    };

    let updated = state
        .store
        .complete_trip(id, completion)
        .await?
        .ok_or_else(|| ApiError::Conflict(format!("Trip is no longer {}", trip.status)))?;
    record_trip_completed();

    info!(trip_id = %id, duration_minutes = updated.duration, "Trip completed");
    Ok(Json(updated))
}
