//! Monitor data structures.

/// The background node prober.
pub mod health_monitor;
