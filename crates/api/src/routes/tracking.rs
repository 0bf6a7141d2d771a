//! Tracking code endpoint handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use persistence::repositories::TrackingCodeInput;
use persistence::StoreError;
use shared::tracking_code::{generate_tracking_code, is_valid_tracking_code};
use tracing::{info, warn};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ApiJson;
use crate::middleware::metrics::{record_tracking_code_collision, record_tracking_code_issued};
use domain::models::tracking_code::{GenerateTrackingCodeRequest, GenerateTrackingCodeResponse};
use domain::models::{TrackingCode, TrackingCodeStatus};

/// Attempts before giving up on finding an unused code.
const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Issue a tracking code for a booking.
///
/// POST /api/tracking/generate
///
/// Returns 404 if the booking does not exist and 400 if `endDate` precedes
/// `startDate`. A code that collides with an existing one is re-rolled.
pub async fn generate_tracking_code_handler(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateTrackingCodeRequest>,
) -> Result<Json<GenerateTrackingCodeResponse>, ApiError> {
    request.validate_window().map_err(|e| {
        ApiError::Validation(
            e.message
                .map(|m| m.to_string())
                .unwrap_or_else(|| "Invalid date range".to_string()),
        )
    })?;

    state
        .store
        .find_booking(request.booking_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Booking not found".to_string()))?;

    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        let input = TrackingCodeInput {
            code: generate_tracking_code(),
            booking_id: request.booking_id,
            start_date: request.start_date,
            end_date: request.end_date,
        };

        match state.store.insert_tracking_code(input).await {
            Ok(tracking_code) => {
                record_tracking_code_issued();
                info!(
                    booking_id = %request.booking_id,
                    tracking_code = %tracking_code.code,
                    "Tracking code issued"
                );
                return Ok(Json(GenerateTrackingCodeResponse {
                    tracking_code: tracking_code.code,
                }));
            }
            Err(StoreError::Conflict(_)) => {
                record_tracking_code_collision();
                warn!(attempt, "Tracking code collision, retrying");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(ApiError::Internal(format!(
        "No unused tracking code after {} attempts",
        MAX_GENERATION_ATTEMPTS
    )))
}

/// Look up a tracking code.
///
/// GET /api/tracking/:trackingCode
///
/// Expired codes are indistinguishable from unknown ones.
pub async fn get_tracking_status(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<TrackingCode>, ApiError> {
    if !is_valid_tracking_code(&code) {
        return Err(ApiError::NotFound("Invalid tracking code".to_string()));
    }

    state
        .store
        .find_tracking_code(&code)
        .await?
        .filter(TrackingCode::is_visible)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Invalid tracking code".to_string()))
}

/// Retire a tracking code.
///
/// POST /api/tracking/:trackingCode/expire
///
/// Returns 409 if the code has already expired.
pub async fn expire_tracking_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<TrackingCode>, ApiError> {
    let tracking_code = state
        .store
        .find_tracking_code(&code)
        .await?
        .ok_or_else(|| ApiError::NotFound("Invalid tracking code".to_string()))?;

    if !tracking_code
        .status
        .can_transition_to(TrackingCodeStatus::Expired)
    {
        return Err(ApiError::Conflict(format!(
            "Tracking code is already {}",
            tracking_code.status
        )));
    }

    let updated = state
        .store
        .update_tracking_code_status(&code, tracking_code.status, TrackingCodeStatus::Expired)
        .await?
        .ok_or_else(|| {
            ApiError::Conflict(format!(
                "Tracking code is no longer {}",
                tracking_code.status
            ))
        })?;

    info!(tracking_code = %code, "Tracking code expired");
    Ok(Json(updated))
}
