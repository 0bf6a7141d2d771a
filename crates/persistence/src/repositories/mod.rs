//! Repository implementations for database operations.

pub mod booking;
pub mod machine;
pub mod tracking_code;
pub mod trip;
pub mod worker;

pub use booking::{BookingInput, BookingRepository};
pub use machine::{MachineInput, MachineRepository};
pub use tracking_code::{TrackingCodeInput, TrackingCodeRepository};
pub use trip::{TripCompletion, TripInput, TripRepository};
pub use worker::{WorkerInput, WorkerRepository};
