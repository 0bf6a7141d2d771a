//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod booking;
pub mod machine;
pub mod tracking_code;
pub mod trip;
pub mod worker;

pub use booking::BookingEntity;
pub use machine::MachineEntity;
pub use tracking_code::TrackingCodeEntity;
pub use trip::TripEntity;
pub use worker::WorkerEntity;

use std::str::FromStr;
use tracing::warn;
use uuid::Uuid;

/// Parses a stored status label. An unrecognised label is logged and replaced
/// by `fallback`.
pub(crate) fn parse_status<T>(table: &'static str, id: Uuid, label: &str, fallback: T) -> T
where
    T: FromStr<Err = String>,
{
    label.parse().unwrap_or_else(|err: String| {
        warn!(
            table,
            row_id = %id,
            status = label,
            error = %err,
            "Unrecognised status in stored row"
        );
        fallback
    })
}
