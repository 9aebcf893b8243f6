//! Implementation blocks for the monitor.

/// Probe loop, node checks, and lifecycle.
pub mod health_monitor;
