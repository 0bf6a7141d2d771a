//! In-process store with the same constraints as the database schema.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Store, StoreResult};
use crate::error::StoreError;
use crate::repositories::{
    BookingInput, MachineInput, TrackingCodeInput, TripCompletion, TripInput, WorkerInput,
};
use domain::models::{
    Booking, BookingStatus, Machine, TrackingCode, TrackingCodeStatus, Trip, TripStatus, Worker,
};

/// Collections held in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    bookings: RwLock<Vec<Booking>>,
    machines: RwLock<Vec<Machine>>,
    workers: RwLock<Vec<Worker>>,
    trips: RwLock<Vec<Trip>>,
    tracking_codes: RwLock<Vec<TrackingCode>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn insert_booking(&self, input: BookingInput) -> StoreResult<Booking> {
        let now = Utc::now();
        let booking = Booking {
            id: Uuid::new_v4(),
            company: input.company,
            email: input.email,
            phone: input.phone,
            address: input.address,
            business_type: input.business_type,
            ad_required: input.ad_required,
            duration: input.duration,
            duration_type: input.duration_type,
            plan: input.plan,
            price: input.price,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        self.bookings.write().await.push(booking.clone());
        Ok(booking)
    }

    async fn list_bookings(&self) -> StoreResult<Vec<Booking>> {
        Ok(self.bookings.read().await.clone())
    }

    async fn find_booking(&self, id: Uuid) -> StoreResult<Option<Booking>> {
        Ok(self.bookings.read().await.iter().find(|b| b.id == id).cloned())
    }

    async fn update_booking_status(
        &self,
        id: Uuid,
        from: BookingStatus,
        to: BookingStatus,
    ) -> StoreResult<Option<Booking>> {
        let mut bookings = self.bookings.write().await;
        Ok(bookings
            .iter_mut()
            .find(|b| b.id == id && b.status == from)
            .map(|booking| {
                booking.status = to;
                booking.updated_at = Utc::now();
                booking.clone()
            }))
    }

    async fn insert_machine(&self, input: MachineInput) -> StoreResult<Machine> {
        let now = Utc::now();
        let machine = Machine {
            id: Uuid::new_v4(),
            name: input.name,
            status: input.status,
            location: input.location,
            assigned_plan: input.assigned_plan,
            created_at: now,
            updated_at: now,
        };
        self.machines.write().await.push(machine.clone());
        Ok(machine)
    }

    async fn list_machines(&self) -> StoreResult<Vec<Machine>> {
        Ok(self.machines.read().await.clone())
    }

    async fn find_machine(&self, id: Uuid) -> StoreResult<Option<Machine>> {
        Ok(self.machines.read().await.iter().find(|m| m.id == id).cloned())
    }

    async fn insert_worker(&self, input: WorkerInput) -> StoreResult<Worker> {
        let now = Utc::now();
        let worker = Worker {
            id: Uuid::new_v4(),
            name: input.name,
            phone: input.phone,
            email: input.email,
            assigned_machine: None,
            status: input.status,
            location: input.location,
            created_at: now,
            updated_at: now,
        };
        self.workers.write().await.push(worker.clone());
        Ok(worker)
    }

    async fn list_workers(&self) -> StoreResult<Vec<Worker>> {
        Ok(self.workers.read().await.clone())
    }

    async fn find_worker(&self, id: Uuid) -> StoreResult<Option<Worker>> {
        Ok(self.workers.read().await.iter().find(|w| w.id == id).cloned())
    }

    async fn assign_worker_machine(
        &self,
        worker_id: Uuid,
        machine_id: Uuid,
    ) -> StoreResult<Option<Worker>> {
        if self.find_machine(machine_id).await?.is_none() {
            return Err(StoreError::MissingReference(
                "workers_assigned_machine_fkey".to_string(),
            ));
        }

        let mut workers = self.workers.write().await;
        Ok(workers.iter_mut().find(|w| w.id == worker_id).map(|worker| {
            worker.assigned_machine = Some(machine_id);
            worker.updated_at = Utc::now();
            worker.clone()
        }))
    }

    async fn insert_trip(&self, input: TripInput) -> StoreResult<Trip> {
        if self.find_worker(input.worker_id).await?.is_none() {
            return Err(StoreError::MissingReference(
                "trips_worker_id_fkey".to_string(),
            ));
        }
        if self.find_machine(input.machine_id).await?.is_none() {
            return Err(StoreError::MissingReference(
                "trips_machine_id_fkey".to_string(),
            ));
        }

        let now = Utc::now();
        let trip = Trip {
            id: Uuid::new_v4(),
            worker: input.worker_id,
            machine: input.machine_id,
            start_time: input.start_time,
            end_time: None,
            location: input.location,
            duration: 0,
            status: TripStatus::InProgress,
            created_at: now,
            updated_at: now,
        };
        self.trips.write().await.push(trip.clone());
        Ok(trip)
    }

    async fn find_trip(&self, id: Uuid) -> StoreResult<Option<Trip>> {
        Ok(self.trips.read().await.iter().find(|t| t.id == id).cloned())
    }

    async fn complete_trip(
        &self,
        id: Uuid,
        completion: TripCompletion,
    ) -> StoreResult<Option<Trip>> {
        let mut trips = self.trips.write().await;
        Ok(trips
            .iter_mut()
            .find(|t| t.id == id && t.status == TripStatus::InProgress)
            .map(|trip| {
                trip.status = TripStatus::Completed;
                trip.end_time = Some(completion.end_time);
                trip.duration = completion.duration_minutes;
                trip.updated_at = Utc::now();
                trip.clone()
            }))
    }

    async fn insert_tracking_code(&self, input: TrackingCodeInput) -> StoreResult<TrackingCode> {
        if self.find_booking(input.booking_id).await?.is_none() {
            return Err(StoreError::MissingReference(
                "tracking_codes_booking_id_fkey".to_string(),
            ));
        }

        let mut codes = self.tracking_codes.write().await;
        if codes.iter().any(|c| c.code == input.code) {
            return Err(StoreError::Conflict("tracking_codes_code_key".to_string()));
        }

        let now = Utc::now();
        let tracking_code = TrackingCode {
            id: Uuid::new_v4(),
            code: input.code,
            booking_id: input.booking_id,
            start_date: input.start_date,
            end_date: input.end_date,
            status: TrackingCodeStatus::Active,
            created_at: now,
            updated_at: now,
        };
        codes.push(tracking_code.clone());
        Ok(tracking_code)
    }

    async fn find_tracking_code(&self, code: &str) -> StoreResult<Option<TrackingCode>> {
        Ok(self
            .tracking_codes
            .read()
            .await
            .iter()
            .find(|c| c.code == code)
            .cloned())
    }

    async fn update_tracking_code_status(
        &self,
        code: &str,
        from: TrackingCodeStatus,
        to: TrackingCodeStatus,
    ) -> StoreResult<Option<TrackingCode>> {
        let mut codes = self.tracking_codes.write().await;
        Ok(codes
            .iter_mut()
            .find(|c| c.code == code && c.status == from)
            .map(|tracking_code| {
                tracking_code.status = to;
                tracking_code.updated_at = Utc::now();
                tracking_code.clone()
            }))
    }
}
