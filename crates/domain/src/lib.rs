//! Domain layer for the WalkVibe backend.
//!
//! This crate contains:
//! - Domain models (Booking, Machine, Worker, Trip, TrackingCode)
//! - Status enums and their allowed transitions
//! - Request/response payloads with boundary validation

pub mod models;
