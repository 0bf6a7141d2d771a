//! Persistence layer for the WalkVibe backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations
//! - The [`store::Store`] abstraction with Postgres and in-memory backends

pub mod db;
pub mod entities;
pub mod error;
pub mod metrics;
pub mod repositories;
pub mod store;

pub use error::StoreError;
pub use store::{MemoryStore, PgStore, Store, StoreResult};
