use serde::{Deserialize, Serialize};
use crate::geo::enums::node_status::NodeStatus;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EdgeNodeStatus {
    pub node_id: String,
    pub region_id: String,
    pub hostname: String,
    pub status: NodeStatus,
    pub latency_ms: f64,
    pub current_load: u64,
    pub capacity: u64,
    pub load_fraction: f64,
    pub last_health_check: i64,
}
