//! Engine and boundary response structures.

/// Per-node load/latency summary for introspection.
pub mod edge_node_status;

/// The orchestrator combining router and node caches.
pub mod geo_cache_engine;

/// Aggregated cross-region statistics.
pub mod geographic_stats;

/// Liveness response shape.
pub mod health_status;

/// Per-region usage summary.
pub mod region_distribution;
