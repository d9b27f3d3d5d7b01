//! # newsrec-observability
//!
//! Tracing subscriber setup and per-stage span macros.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter, names};
