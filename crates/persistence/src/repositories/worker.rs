//! Worker repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::WorkerEntity;
use crate::metrics::QueryTimer;
use domain::models::{GeoPoint, WorkerStatus};

const WORKER_COLUMNS: &str = r#"
    id, name, phone, email, assigned_machine, status,
    latitude, longitude, created_at, updated_at
"#;

/// Input data for inserting a worker record.
#[derive(Debug, Clone)]
pub struct WorkerInput {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: WorkerStatus,
    pub location: Option<GeoPoint>,
}

/// Repository for worker database operations.
#[derive(Clone)]
pub struct WorkerRepository {
    pool: PgPool,
}

impl WorkerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, input: WorkerInput) -> Result<WorkerEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_worker");

        let result = sqlx::query_as::<_, WorkerEntity>(&format!(
            r#"
            INSERT INTO workers (name, phone, email, status, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {WORKER_COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(input.status.as_str())
        .bind(input.location.map(|l| l.latitude))
        .bind(input.location.map(|l| l.longitude))
        .fetch_one(&self.pool)
        .await;

        timer.record();
        result
    }

    pub async fn find_all(&self) -> Result<Vec<WorkerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_workers");

        let result = sqlx::query_as::<_, WorkerEntity>(&format!(
            "SELECT {WORKER_COLUMNS} FROM workers ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await;

        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<WorkerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_worker_by_id");

        let result = sqlx::query_as::<_, WorkerEntity>(&format!(
            "SELECT {WORKER_COLUMNS} FROM workers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;

        timer.record();
        result
    }

    /// Point the worker at a machine. The machine row is not touched.
    ///
    /// Last write wins when two scans race for the same worker.
    pub async fn assign_machine(
        &self,
        worker_id: Uuid,
        machine_id: Uuid,
    ) -> Result<Option<WorkerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("assign_worker_machine");

        let result = sqlx::query_as::<_, WorkerEntity>(&format!(
            r#"
            UPDATE workers
            SET assigned_machine = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {WORKER_COLUMNS}
            "#
        ))
        .bind(worker_id)
        .bind(machine_id)
        .fetch_optional(&self.pool)
        .await;

        timer.record();
        result
    }
}
