//! PostgreSQL-backed store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{Store, StoreResult};
use crate::repositories::{
    BookingInput, BookingRepository, MachineInput, MachineRepository, TrackingCodeInput,
    TrackingCodeRepository, TripCompletion, TripInput, TripRepository, WorkerInput,
    WorkerRepository,
};
use domain::models::{
    Booking, BookingStatus, Machine, TrackingCode, TrackingCodeStatus, Trip, Worker,
};

/// Delegates each operation to the matching repository.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
    bookings: BookingRepository,
    machines: MachineRepository,
    workers: WorkerRepository,
    trips: TripRepository,
    tracking_codes: TrackingCodeRepository,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            bookings: BookingRepository::new(pool.clone()),
            machines: MachineRepository::new(pool.clone()),
            workers: WorkerRepository::new(pool.clone()),
            trips: TripRepository::new(pool.clone()),
            tracking_codes: TrackingCodeRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        crate::metrics::record_pool_metrics(&self.pool);
        crate::db::ping(&self.pool).await?;
        Ok(())
    }

    async fn insert_booking(&self, input: BookingInput) -> StoreResult<Booking> {
        Ok(self.bookings.insert(input).await?.into())
    }

    async fn list_bookings(&self) -> StoreResult<Vec<Booking>> {
        let rows = self.bookings.find_all().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_booking(&self, id: Uuid) -> StoreResult<Option<Booking>> {
        Ok(self.bookings.find_by_id(id).await?.map(Into::into))
    }

    async fn update_booking_status(
        &self,
        id: Uuid,
        from: BookingStatus,
        to: BookingStatus,
    ) -> StoreResult<Option<Booking>> {
        Ok(self
            .bookings
            .update_status(id, from, to)
            .await?
            .map(Into::into))
    }

    async fn insert_machine(&self, input: MachineInput) -> StoreResult<Machine> {
        Ok(self.machines.insert(input).await?.into())
    }

    async fn list_machines(&self) -> StoreResult<Vec<Machine>> {
        let rows = self.machines.find_all().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_machine(&self, id: Uuid) -> StoreResult<Option<Machine>> {
        Ok(self.machines.find_by_id(id).await?.map(Into::into))
    }

    async fn insert_worker(&self, input: WorkerInput) -> StoreResult<Worker> {
        Ok(self.workers.insert(input).await?.into())
    }

    async fn list_workers(&self) -> StoreResult<Vec<Worker>> {
        let rows = self.workers.find_all().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_worker(&self, id: Uuid) -> StoreResult<Option<Worker>> {
        Ok(self.workers.find_by_id(id).await?.map(Into::into))
    }

    async fn assign_worker_machine(
        &self,
        worker_id: Uuid,
        machine_id: Uuid,
    ) -> StoreResult<Option<Worker>> {
        Ok(self
            .workers
            .assign_machine(worker_id, machine_id)
            .await?
            .map(Into::into))
    }

    async fn insert_trip(&self, input: TripInput) -> StoreResult<Trip> {
        Ok(self.trips.insert(input).await?.into())
    }

    async fn find_trip(&self, id: Uuid) -> StoreResult<Option<Trip>> {
        Ok(self.trips.find_by_id(id).await?.map(Into::into))
    }

    async fn complete_trip(
        &self,
        id: Uuid,
        completion: TripCompletion,
    ) -> StoreResult<Option<Trip>> {
        Ok(self.trips.complete(id, completion).await?.map(Into::into))
    }

    async fn insert_tracking_code(&self, input: TrackingCodeInput) -> StoreResult<TrackingCode> {
        Ok(self.tracking_codes.insert(input).await?.into())
    }

    async fn find_tracking_code(&self, code: &str) -> StoreResult<Option<TrackingCode>> {
        Ok(self.tracking_codes.find_by_code(code).await?.map(Into::into))
    }

    async fn update_tracking_code_status(
        &self,
        code: &str,
        from: TrackingCodeStatus,
        to: TrackingCodeStatus,
    ) -> StoreResult<Option<TrackingCode>> {
        Ok(self
            .tracking_codes
            .update_status(code, from, to)
            .await?
            .map(Into::into))
    }
}
