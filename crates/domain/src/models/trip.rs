//! Trip domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

use super::location::GeoPoint;

// ============================================================================
// Trip Status Enum
// ============================================================================

/// Status of a trip in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripStatus {
    #[default]
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TripStatus {
    /// Returns the string representation for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::InProgress => "In Progress",
            TripStatus::Completed => "Completed",
        }
    }

    /// Check if transition to target status is valid.
    pub fn can_transition_to(&self, target: TripStatus) -> bool {
        match (self, target) {
            (TripStatus::InProgress, TripStatus::Completed) => true,
            _ => false,
        }
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TripStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "In Progress" => Ok(TripStatus::InProgress),
            "Completed" => Ok(TripStatus::Completed),
            _ => Err(format!(
                "Invalid trip status: {}. Must be one of: In Progress, Completed",
                s
            )),
        }
    }
}

// ============================================================================
// Core Model
// ============================================================================

/// A worker carrying a machine, started at a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: Uuid,
    pub worker: Uuid,
    pub machine: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<GeoPoint>,
    /// Whole minutes between start and end; 0 while in progress.
    pub duration: i64,
    pub status: TripStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Whole minutes elapsed between `start` and `end`, never negative.
pub fn duration_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_minutes().max(0)
}

// ============================================================================
// Request DTOs
// ============================================================================

/// Request payload for starting a trip.
///
/// Client-supplied times are ignored; the server stamps the start time.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StartTripRequest {
    pub worker_id: Uuid,

    pub machine_id: Uuid,

    #[validate(nested)]
    pub location: GeoPoint,
}

// ============================================================================
// Tests
// ============================================================================
