//! Machine entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::parse_status;
use domain::models::{GeoPoint, MachineStatus};

/// Database row mapping for the machines table.
#[derive(Debug, Clone, FromRow)]
pub struct MachineEntity {
    pub id: Uuid,
    pub name: String,
    pub status: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub assigned_plan: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MachineEntity> for domain::models::Machine {
    fn from(entity: MachineEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            status: parse_status("machines", entity.id, &entity.status, MachineStatus::Available),
            location: GeoPoint::from_parts(entity.latitude, entity.longitude),
            assigned_plan: entity.assigned_plan,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
