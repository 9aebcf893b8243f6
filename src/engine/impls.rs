//! Implementation blocks for the orchestrator.

/// Write, read, statistics, and liveness operations.
pub mod geo_cache_engine;
