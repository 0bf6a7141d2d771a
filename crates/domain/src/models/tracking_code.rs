//! Tracking code domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Whether a tracking code can still be used by the customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackingCodeStatus {
    #[default]
    Active,
    Expired,
}

impl TrackingCodeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingCodeStatus::Active => "Active",
            TrackingCodeStatus::Expired => "Expired",
        }
    }

    pub fn can_transition_to(&self, target: TrackingCodeStatus) -> bool {
        matches!(
            (self, target),
            (TrackingCodeStatus::Active, TrackingCodeStatus::Expired)
        )
    }
}

impl fmt::Display for TrackingCodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TrackingCodeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(TrackingCodeStatus::Active),
            "Expired" => Ok(TrackingCodeStatus::Expired),
            _ => Err(format!(
                "Invalid tracking code status: {}. Must be one of: Active, Expired",
                s
            )),
        }
    }
}

/// A short code a customer uses to follow their campaign without logging in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingCode {
    pub id: Uuid,
    pub code: String,
    pub booking_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: TrackingCodeStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TrackingCode {
    /// Expired codes are reported to customers as not found.
    pub fn is_visible(&self) -> bool {
        self.status == TrackingCodeStatus::Active
    }
}

/// Request payload for issuing a tracking code.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTrackingCodeRequest {
    pub booking_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl GenerateTrackingCodeRequest {
    /// Cross-field check that the campaign window is not inverted.
    pub fn validate_window(&self) -> Result<(), validator::ValidationError> {
        shared::validation::validate_date_range(self.start_date, self.end_date)
    }
}

/// Response payload carrying a freshly issued code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTrackingCodeResponse {
    pub tracking_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn request(start: DateTime<Utc>, end: DateTime<Utc>) -> GenerateTrackingCodeRequest {
        GenerateTrackingCodeRequest {
            booking_id: Uuid::new_v4(),
            start_date: start,
            end_date: end,
        }
    }

    #[test]
    fn test_tracking_code_status_transitions() {
        assert!(TrackingCodeStatus::Active.can_transition_to(TrackingCodeStatus::Expired));
        assert!(!TrackingCodeStatus::Expired.can_transition_to(TrackingCodeStatus::Active));
        assert!(!TrackingCodeStatus::Expired.can_transition_to(TrackingCodeStatus::Expired));
    }

    #[test]
    fn test_tracking_code_status_from_str() {
        assert_eq!(
            "Expired".parse::<TrackingCodeStatus>().unwrap(),
            TrackingCodeStatus::Expired
        );
        assert!("expired".parse::<TrackingCodeStatus>().is_err());
    }

    #[test]
    fn test_validate_window() {
        let now = Utc::now();
        assert!(request(now, now + Duration::days(7)).validate_window().is_ok());
        assert!(request(now, now - Duration::days(1)).validate_window().is_err());
    }

    #[test]
    fn test_visibility_follows_status() {
        let now = Utc::now();
        let mut code = TrackingCode {
            id: Uuid::new_v4(),
            code: "ab12cd34".to_string(),
            booking_id: Uuid::new_v4(),
            start_date: now,
            end_date: now,
            status: TrackingCodeStatus::Active,
            created_at: now,
            updated_at: now,
        };
        assert!(code.is_visible());
        code.status = TrackingCodeStatus::Expired;
        assert!(!code.is_visible());
    }

    #[test]
    fn test_generate_response_field_name() {
        let json = serde_json::to_value(GenerateTrackingCodeResponse {
            tracking_code: "ab12cd34".to_string(),
        })
        .unwrap();
        assert_eq!(json["trackingCode"], "ab12cd34");
    }
}
