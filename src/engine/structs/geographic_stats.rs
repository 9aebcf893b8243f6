use serde::{Deserialize, Serialize};
use crate::engine::structs::region_distribution::RegionDistribution;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GeographicStats {
    pub total_regions: u64,
    /// Regions with at least one active node.
    pub active_regions: u64,
    /// Mean over active nodes, 0.0 when none are active.
    pub average_latency_ms: f64,
    /// Access-weighted mean hit rate across all node caches.
    pub cache_hit_rate: f64,
    pub regional_distribution: Vec<RegionDistribution>,
}
