use std::collections::BTreeMap;
use parking_lot::RwLock;
use crate::geo::structs::region::Region;

/// Topology shared between the router, the orchestrator, and the health
/// monitor. Regions and nodes are fixed at startup; only health and load
/// fields mutate afterwards.
pub struct RegionRegistry {
    pub regions: RwLock<BTreeMap<String, Region>>,
    /// Region ids in configuration order, for the deterministic
    /// no-coordinate fallback.
    pub region_order: Vec<String>,
    /// Node id to region id index.
    pub node_index: BTreeMap<String, String>,
}
