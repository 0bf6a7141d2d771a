//! Tracking code repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::TrackingCodeEntity;
use crate::metrics::QueryTimer;
use domain::models::TrackingCodeStatus;

const TRACKING_CODE_COLUMNS: &str =
    "id, code, booking_id, start_date, end_date, status, created_at, updated_at";

/// Input data for inserting a tracking code.
#[derive(Debug, Clone)]
pub struct TrackingCodeInput {
    pub code: String,
    pub booking_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Repository for tracking code database operations.
#[derive(Clone)]
pub struct TrackingCodeRepository {
    pool: PgPool,
}

impl TrackingCodeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert an `Active` code. A duplicate code violates `tracking_codes_code_key`.
    pub async fn insert(
        &self,
        input: TrackingCodeInput,
    ) -> Result<TrackingCodeEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_tracking_code");

        let result = sqlx::query_as::<_, TrackingCodeEntity>(&format!(
            r#"
            INSERT INTO tracking_codes (code, booking_id, start_date, end_date, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {TRACKING_CODE_COLUMNS}
            "#
        ))
        .bind(&input.code)
        .bind(input.booking_id)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(TrackingCodeStatus::Active.as_str())
        .fetch_one(&self.pool)
        .await;

        timer.record();
        result
    }

    /// Exact match on the code string.
    pub async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<TrackingCodeEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_tracking_code_by_code");

        let result = sqlx::query_as::<_, TrackingCodeEntity>(&format!(
            "SELECT {TRACKING_CODE_COLUMNS} FROM tracking_codes WHERE code = $1"
        ))
        .bind(code)
        .fetch_optional(&self.pool)
        .await;

        timer.record();
        result
    }

    /// Move a code from `from` to `to`. Returns `None` when no code with this
    /// value is currently in `from`.
    pub async fn update_status(
        &self,
        code: &str,
        from: TrackingCodeStatus,
        to: TrackingCodeStatus,
    ) -> Result<Option<TrackingCodeEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_tracking_code_status");

        let result = sqlx::query_as::<_, TrackingCodeEntity>(&format!(
            r#"
            UPDATE tracking_codes
            SET status = $2, updated_at = NOW()
            WHERE code = $1 AND status = $3
            RETURNING {TRACKING_CODE_COLUMNS}
            "#
        ))
        .bind(code)
        .bind(to.as_str())
        .bind(from.as_str())
        .fetch_optional(&self.pool)
        .await;

        timer.record();
        result
    }
}
