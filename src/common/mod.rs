//! Common utilities and shared functionality.
//!
//! Contains the logging setup used by the binary, timestamp helpers shared
//! by the cache and registry, and the generic error type returned during
//! configuration loading.

/// Helper functions for logging and timestamps.
pub mod common;

/// Implementation blocks for common structures.
pub mod impls;

/// Shared data structures.
pub mod structs;
