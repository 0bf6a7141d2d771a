//! Shared utilities and common types for the WalkVibe backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Common validation logic
//! - Tracking code generation

pub mod tracking_code;
pub mod validation;
