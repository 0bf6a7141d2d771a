//! Booking repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::BookingEntity;
use crate::metrics::QueryTimer;
use domain::models::BookingStatus;

const BOOKING_COLUMNS: &str = r#"
    id, company, email, phone, address, business_type, ad_required,
    duration, duration_type, plan, price, status, created_at, updated_at
"#;

/// Input data for inserting a booking record.
#[derive(Debug, Clone)]
pub struct BookingInput {
    pub company: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub business_type: Option<String>,
    pub ad_required: Option<String>,
    pub duration: Option<i32>,
    pub duration_type: Option<String>,
    pub plan: Option<String>,
    pub price: Option<f64>,
}

/// Repository for booking database operations.
#[derive(Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Creates a new BookingRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a booking. New bookings always start as `Pending`.
    pub async fn insert(&self, input: BookingInput) -> Result<BookingEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_booking");

        let result = sqlx::query_as::<_, BookingEntity>(&format!(
            r#"
            INSERT INTO bookings (
                company, email, phone, address, business_type, ad_required,
                duration, duration_type, plan, price, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(&input.company)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.address)
        .bind(&input.business_type)
        .bind(&input.ad_required)
        .bind(input.duration)
        .bind(&input.duration_type)
        .bind(&input.plan)
        .bind(input.price)
        .bind(BookingStatus::Pending.as_str())
        .fetch_one(&self.pool)
        .await;

        timer.record();
        result
    }

    /// All bookings, oldest first.
    pub async fn find_all(&self) -> Result<Vec<BookingEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_bookings");

        let result = sqlx::query_as::<_, BookingEntity>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await;

        timer.record();
        result
    }

    /// Find booking by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<BookingEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_booking_by_id");

        let result = sqlx::query_as::<_, BookingEntity>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;

        timer.record();
        result
    }

    /// Move a booking from `from` to `to`. Returns `None` when no booking
    /// with this id is currently in `from`.
    pub async fn update_status(
        &self,
        id: Uuid,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<Option<BookingEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_booking_status");

        let result = sqlx::query_as::<_, BookingEntity>(&format!(
            r#"
            UPDATE bookings
            SET status = $2, updated_at = NOW()
            WHERE id = $1 AND status = $3
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(to.as_str())
        .bind(from.as_str())
        .fetch_optional(&self.pool)
        .await;

        timer.record();
        result
    }
}
