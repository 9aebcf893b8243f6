use serde::{
    Deserialize,
    Serialize
};
use crate::config::structs::edge_node_config::EdgeNodeConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegionConfig {
    pub id: String,
    pub name: String,
    pub country: String,
    /// Region centroid used for great-circle distance routing.
    pub latitude: f64,
    pub longitude: f64,
    /// Aggregate capacity units available to the region.
    pub cache_capacity: u64,
    pub edge_nodes: Vec<EdgeNodeConfig>,
}
