//! Health monitoring module.
//!
//! A background task that probes every edge node on a fixed interval,
//! entirely off the request path. It is the only writer of the health
//! fields in the registry: status, latency, load, and probe timestamp.
//!
//! # Behavior
//!
//! Each probe is a TCP connect with a deadline so one unreachable node
//! cannot stall the loop. A node that fails the configured number of
//! consecutive probes transitions to inactive; a single successful probe
//! brings it back. Shutdown is graceful: no new probes are scheduled and
//! in-flight probes finish.

/// Error types for node probes.
pub mod errors;

/// Implementation blocks for the monitor.
pub mod impls;

/// Monitor data structures.
pub mod structs;
