//! Custom Axum extractors.
//!
//! Extractors that report malformed input through [`crate::error::ApiError`].

pub mod json;
pub mod path;

pub use json::ApiJson;
pub use path::IdPath;
