//! Booking entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::parse_status;
use domain::models::BookingStatus;

/// Database row mapping for the bookings table.
#[derive(Debug, Clone, FromRow)]
pub struct BookingEntity {
    pub id: Uuid,
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
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BookingEntity> for domain::models::Booking {
    fn from(entity: BookingEntity) -> Self {
        let status = parse_status("bookings", entity.id, &entity.status, BookingStatus::Pending);

        Self {
            id: entity.id,
            company: entity.company,
            email: entity.email,
            phone: entity.phone,
            address: entity.address,
            business_type: entity.business_type,
            ad_required: entity.ad_required,
            duration: entity.duration,
            duration_type: entity.duration_type,
            plan: entity.plan,
            price: entity.price,
            status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
