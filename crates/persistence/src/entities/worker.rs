//! Worker entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::parse_status;
use domain::models::{GeoPoint, WorkerStatus};

/// Database row mapping for the workers table.
#[derive(Debug, Clone, FromRow)]
pub struct WorkerEntity {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub assigned_machine: Option<Uuid>,
    pub status: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<WorkerEntity> for domain::models::Worker {
    fn from(entity: WorkerEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            phone: entity.phone,
            email: entity.email,
            assigned_machine: entity.assigned_machine,
            status: parse_status("workers", entity.id, &entity.status, WorkerStatus::Available),
            location: GeoPoint::from_parts(entity.latitude, entity.longitude),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::Worker;

    #[test]
    fn test_entity_to_domain() {
        let machine_id = Uuid::new_v4();
        let entity = WorkerEntity {
            id: Uuid::new_v4(),
            name: "Nimal".to_string(),
            phone: None,
            email: Some("nimal@example.com".to_string()),
            assigned_machine: Some(machine_id),
            status: "On Duty".to_string(),
            latitude: Some(7.29),
            longitude: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let worker: Worker = entity.into();
        assert_eq!(worker.assigned_machine, Some(machine_id));
        assert_eq!(worker.status, WorkerStatus::OnDuty);
        // Half a coordinate is not a location
        assert!(worker.location.is_none());
    }
}
