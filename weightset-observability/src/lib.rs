//! # weightset-observability
//!
//! Subscriber initialisation and span definitions. The engine only emits
//! `tracing` events; whether they go anywhere is decided here by the caller.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, names};
