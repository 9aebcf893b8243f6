use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RegionDistribution {
    pub region_id: String,
    pub name: String,
    pub items: u64,
    pub current_usage: u64,
    pub cache_capacity: u64,
    pub total_nodes: u64,
    pub active_nodes: u64,
}
