//! HTTP route handlers.

pub mod bookings;
pub mod health;
pub mod machines;
pub mod tracking;
pub mod trips;
pub mod workers;
