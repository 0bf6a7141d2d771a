//! Storage abstraction used by the HTTP layer.
//!
//! [`PgStore`] is the production backend. [`MemoryStore`] keeps everything
//! in process and backs the integration tests.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::repositories::{
    BookingInput, MachineInput, TrackingCodeInput, TripCompletion, TripInput, WorkerInput,
};
use domain::models::{
    Booking, BookingStatus, Machine, TrackingCode, TrackingCodeStatus, Trip, Worker,
};

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations for every WalkVibe collection.
///
/// Lookups return `Ok(None)` for unknown ids. Status updates only apply to a
/// row still in the expected state and return `Ok(None)` otherwise, so two
/// racing transitions cannot both succeed.
#[async_trait]
pub trait Store: Send + Sync {
    /// Checks that the backend is reachable.
    async fn ping(&self) -> StoreResult<()>;

    async fn insert_booking(&self, input: BookingInput) -> StoreResult<Booking>;
    async fn list_bookings(&self) -> StoreResult<Vec<Booking>>;
    async fn find_booking(&self, id: Uuid) -> StoreResult<Option<Booking>>;
    async fn update_booking_status(
        &self,
        id: Uuid,
        from: BookingStatus,
        to: BookingStatus,
    ) -> StoreResult<Option<Booking>>;

    async fn insert_machine(&self, input: MachineInput) -> StoreResult<Machine>;
    async fn list_machines(&self) -> StoreResult<Vec<Machine>>;
    async fn find_machine(&self, id: Uuid) -> StoreResult<Option<Machine>>;

    async fn insert_worker(&self, input: WorkerInput) -> StoreResult<Worker>;
    async fn list_workers(&self) -> StoreResult<Vec<Worker>>;
    async fn find_worker(&self, id: Uuid) -> StoreResult<Option<Worker>>;
    async fn assign_worker_machine(
        &self,
        worker_id: Uuid,
        machine_id: Uuid,
    ) -> StoreResult<Option<Worker>>;

    /// Fails with [`StoreError::MissingReference`] when the worker or machine is gone.
    async fn insert_trip(&self, input: TripInput) -> StoreResult<Trip>;
    async fn find_trip(&self, id: Uuid) -> StoreResult<Option<Trip>>;
    /// Only applies to a trip that is still `In Progress`.
    async fn complete_trip(
        &self,
        id: Uuid,
        completion: TripCompletion,
    ) -> StoreResult<Option<Trip>>;

    /// Fails with [`StoreError::Conflict`] when the code string is already taken.
    async fn insert_tracking_code(&self, input: TrackingCodeInput) -> StoreResult<TrackingCode>;
    async fn find_tracking_code(&self, code: &str) -> StoreResult<Option<TrackingCode>>;
    async fn update_tracking_code_status(
        &self,
        code: &str,
        from: TrackingCodeStatus,
        to: TrackingCodeStatus,
    ) -> StoreResult<Option<TrackingCode>>;
}
