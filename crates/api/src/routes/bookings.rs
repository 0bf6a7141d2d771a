//! Booking endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use persistence::repositories::BookingInput;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{ApiJson, IdPath};
use crate::middleware::metrics::record_booking_created;
use domain::models::booking::CreateBookingRequest;
use domain::models::{Booking, BookingStatus, MessageResponse};

/// Record a customer booking.
///
/// POST /api/bookings
///
/// New bookings always start as `Pending`; a client-supplied status is ignored.
pub async fn create_booking(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    request.validate()?;

    let input = BookingInput {
        company: request.company.trim().to_string(),
        email: request.email,
        phone: request.phone,
        address: request.address,
        business_type: request.business_type,
        ad_required: request.ad_required,
        duration: request.duration,
        duration_type: request.duration_type,
        plan: request.plan,
        price: request.price,
    };

    let booking = state.store.insert_booking(input).await?;
    record_booking_created();

    info!(
        booking_id = %booking.id,
        company = %booking.company,
        plan = booking.plan.as_deref().unwrap_or("-"),
        "Booking created"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created(
            "Booking received successfully!",
            booking.id,
        )),
    ))
}

/// List every booking, oldest first.
///
/// GET /api/bookings
pub async fn list_bookings(State(state): State<AppState>) -> Result<Json<Vec<Booking>>, ApiError> {
    let bookings = state.store.list_bookings().await?;
    Ok(Json(bookings))
}

/// GET /api/bookings/:id
pub async fn get_booking(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Booking>, ApiError> {
    let booking = state
        .store
        .find_booking(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Booking not found".to_string()))?;
    Ok(Json(booking))
}

/// Move a booking from `Pending` to `Confirmed`.
///
/// POST /api/bookings/:id/confirm
///
/// Returns 404 if the booking does not exist, 409 if it is already confirmed.
pub async fn confirm_booking(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Booking>, ApiError> {
    let booking = state
        .store
        .find_booking(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Booking not found".to_string()))?;

    if !booking.status.can_transition_to(BookingStatus::Confirmed) {
        return Err(ApiError::Conflict(format!(
            "Booking is already {}",
            booking.status
        )));
    }

    let updated = state
        .store
        .update_booking_status(id, booking.status, BookingStatus::Confirmed)
        .await?
        .ok_or_else(|| ApiError::Conflict(format!("Booking is no longer {}", booking.status)))?;

    info!(booking_id = %id, "Booking confirmed");
    Ok(Json(updated))
}
