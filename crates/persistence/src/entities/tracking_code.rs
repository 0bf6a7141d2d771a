//! Tracking code entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::parse_status;
use domain::models::TrackingCodeStatus;

/// Database row mapping for the tracking_codes table.
#[derive(Debug, Clone, FromRow)]
pub struct TrackingCodeEntity {
    pub id: Uuid,
    pub code: String,
    pub booking_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TrackingCodeEntity> for domain::models::TrackingCode {
    fn from(entity: TrackingCodeEntity) -> Self {
        // An unreadable status must never expose a code
        let status = parse_status(
            "tracking_codes",
            entity.id,
            &entity.status,
            TrackingCodeStatus::Expired,
        );

        Self {
            id: entity.id,
            code: entity.code,
            booking_id: entity.booking_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
