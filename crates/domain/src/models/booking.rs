//! Booking domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Booking Status Enum
// ============================================================================

/// Status of a customer ad-booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
}

impl BookingStatus {
    /// Returns the string representation for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
        }
    }

    /// Check if transition to target status is valid.
    pub fn can_transition_to(&self, target: BookingStatus) -> bool {
        matches!(
            (self, target),
            (BookingStatus::Pending, BookingStatus::Confirmed)
        )
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(BookingStatus::Pending),
            "Confirmed" => Ok(BookingStatus::Confirmed),
            _ => Err(format!(
                "Invalid booking status: {}. Must be one of: Pending, Confirmed",
                s
            )),
        }
    }
}

// ============================================================================
// Core Model
// ============================================================================

/// A customer's request to run an advertisement on the fleet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub company: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub business_type: Option<String>,
    pub ad_required: Option<String>,
    pub duration: Option<i32>,
    pub duration_type: Option<String>,
    pub plan: Option<String>,
    pub price: Option<f64>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Request DTOs
// ============================================================================

/// Request payload for creating a booking.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[validate(
        length(min = 1, max = 200, message = "company must be 1-200 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub company: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 50, message = "phone must be at most 50 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 500, message = "address must be at most 500 characters"))]
    pub address: Option<String>,

    #[validate(length(max = 100, message = "businessType must be at most 100 characters"))]
    pub business_type: Option<String>,

    #[validate(length(max = 1000, message = "adRequired must be at most 1000 characters"))]
    pub ad_required: Option<String>,

    #[validate(range(min = 1, max = 3650, message = "duration must be between 1 and 3650"))]
    pub duration: Option<i32>,

    #[validate(length(max = 50, message = "durationType must be at most 50 characters"))]
    pub duration_type: Option<String>,

    #[validate(length(max = 100, message = "plan must be at most 100 characters"))]
    pub plan: Option<String>,

    #[validate(custom(function = "shared::validation::validate_price"))]
    pub price: Option<f64>,
}
