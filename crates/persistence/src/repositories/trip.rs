//! Trip repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::TripEntity;
use crate::metrics::QueryTimer;
use domain::models::{GeoPoint, TripStatus};

const TRIP_COLUMNS: &str = r#"
    id, worker_id, machine_id, start_time, end_time, latitude, longitude,
    duration_minutes, status, created_at, updated_at
"#;

/// Input data for inserting a trip record.
#[derive(Debug, Clone)]
pub struct TripInput {
    pub worker_id: Uuid,
    pub machine_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub location: Option<GeoPoint>,
}

/// Input data for closing a trip.
#[derive(Debug, Clone)]
pub struct TripCompletion {
    pub end_time: DateTime<Utc>,
    pub duration_minutes: i64,
}

/// Repository for trip database operations.
#[derive(Clone)]
pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    /// Creates a new TripRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a trip as `In Progress` with zero duration.
    pub async fn insert(&self, input: TripInput) -> Result<TripEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_trip");

        let result = sqlx::query_as::<_, TripEntity>(&format!(
            r#"
            INSERT INTO trips (
                worker_id, machine_id, start_time, latitude, longitude,
                duration_minutes, status
            )
            VALUES ($1, $2, $3, $4, $5, 0, $6)
            RETURNING {TRIP_COLUMNS}
            "#
        ))
        .bind(input.worker_id)
        .bind(input.machine_id)
        .bind(input.start_time)
        .bind(input.location.map(|l| l.latitude))
        .bind(input.location.map(|l| l.longitude))
        .bind(TripStatus::InProgress.as_str())
        .fetch_one(&self.pool)
        .await;

        timer.record();
        result
    }

    /// Find trip by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<TripEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_trip_by_id");

        let result = sqlx::query_as::<_, TripEntity>(&format!(
            "SELECT {TRIP_COLUMNS} FROM trips WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;

        timer.record();
        result
    }

    /// Mark an in-progress trip `Completed` with its end time and duration.
    /// Returns `None` when no in-progress trip has this id.
    pub async fn complete(
        &self,
        id: Uuid,
        completion: TripCompletion,
    ) -> Result<Option<TripEntity>, sqlx::Error> {
        let timer = QueryTimer::new("complete_trip");

        let result = sqlx::query_as::<_, TripEntity>(&format!(
            r#"
            UPDATE trips
            SET status = $2, end_time = $3, duration_minutes = $4, updated_at = NOW()
            WHERE id = $1 AND status = $5
            RETURNING {TRIP_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(TripStatus::Completed.as_str())
        .bind(completion.end_time)
        .bind(completion.duration_minutes)
        .bind(TripStatus::InProgress.as_str())
        .fetch_optional(&self.pool)
        .await;

        timer.record();
        result
    }
}
