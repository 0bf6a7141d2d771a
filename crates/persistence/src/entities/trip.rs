//! Trip entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::parse_status;
use domain::models::{GeoPoint, TripStatus};

/// Database row mapping for the trips table.
#[derive(Debug, Clone, FromRow)]
pub struct TripEntity {
    pub id: Uuid,
    pub worker_id: Uuid,
    pub machine_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub duration_minutes: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TripEntity {
    /// Convert to domain model.
    pub fn into_domain(self) -> domain::models::Trip {
        let status = parse_status("trips", self.id, &self.status, TripStatus::InProgress);

        domain::models::Trip {
            id: self.id,
            worker: self.worker_id,
            machine: self.machine_id,
            start_time: self.start_time,
            end_time: self.end_time,
            location: GeoPoint::from_parts(self.latitude, self.longitude),
            duration: self.duration_minutes,
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<TripEntity> for domain::models::Trip {
    fn from(entity: TripEntity) -> Self {
        entity.into_domain()
    }
}
