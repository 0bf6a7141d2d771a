//! Domain models for WalkVibe.

pub mod booking;
pub mod location;
pub mod machine;
pub mod response;
pub mod tracking_code;
pub mod trip;
pub mod worker;

pub use booking::{Booking, BookingStatus};
pub use location::GeoPoint;
pub use machine::{Machine, MachineStatus};
pub use response::MessageResponse;
pub use tracking_code::{TrackingCode, TrackingCodeStatus};
pub use trip::{Trip, TripStatus};
pub use worker::{Worker, WorkerStatus};
