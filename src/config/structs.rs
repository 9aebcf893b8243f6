//! Configuration data structures.

/// Local cache tuning (TTL, compression, counters).
pub mod cache_config;

/// Top-level configuration structure.
pub mod configuration;

/// Static edge node definition within a region.
pub mod edge_node_config;

/// Health monitor schedule and thresholds.
pub mod health_check_config;

/// Static region definition with centroid and capacity.
pub mod region_config;

/// Routing score weights and default region.
pub mod routing_config;
