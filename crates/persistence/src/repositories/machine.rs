//! Machine repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::MachineEntity;
use crate::metrics::QueryTimer;
use domain::models::{GeoPoint, MachineStatus};

const MACHINE_COLUMNS: &str =
    "id, name, status, latitude, longitude, assigned_plan, created_at, updated_at";

/// Input data for inserting a machine record.
#[derive(Debug, Clone)]
pub struct MachineInput {
    pub name: String,
    pub status: MachineStatus,
    pub location: Option<GeoPoint>,
    pub assigned_plan: Option<String>,
}

/// Repository for machine database operations.
#[derive(Clone)]
pub struct MachineRepository {
    pool: PgPool,
}

impl MachineRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, input: MachineInput) -> Result<MachineEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_machine");

        let result = sqlx::query_as::<_, MachineEntity>(&format!(
            r#"
            INSERT INTO machines (name, status, latitude, longitude, assigned_plan)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {MACHINE_COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(input.status.as_str())
        .bind(input.location.map(|l| l.latitude))
        .bind(input.location.map(|l| l.longitude))
        .bind(&input.assigned_plan)
        .fetch_one(&self.pool)
        .await;

        timer.record();
        result
    }

    pub async fn find_all(&self) -> Result<Vec<MachineEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_machines");

        let result = sqlx::query_as::<_, MachineEntity>(&format!(
            "SELECT {MACHINE_COLUMNS} FROM machines ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await;

        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<MachineEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_machine_by_id");

        let result = sqlx::query_as::<_, MachineEntity>(&format!(
            "SELECT {MACHINE_COLUMNS} FROM machines WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;

        timer.record();
        result
    }
}
