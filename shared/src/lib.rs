//! Shared types and derived metrics for the Sales Dashboard
//!
//! This crate contains the record shapes fetched by the dashboard and the pure
//! computations over them, shared between the backend and the browser (via WASM).
//! Nothing in here performs I/O or keeps state between calls.

pub mod error;
pub mod metrics;
pub mod models;
pub mod types;
pub mod validation;

pub use error::*;
pub use metrics::*;
pub use models::*;
pub use types::*;
pub use validation::*;
