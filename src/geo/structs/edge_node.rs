use serde::{Deserialize, Serialize};
use crate::geo::enums::node_status::NodeStatus;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EdgeNode {
    pub id: String,
    /// Back-reference to the owning region, not ownership.
    pub region_id: String,
    pub hostname: String,
    pub status: NodeStatus,
    /// Last observed round-trip estimate in milliseconds.
    pub latency_ms: f64,
    pub current_load: u64,
    pub capacity: u64,
    /// Unix seconds of the last probe, 0 before the first one.
    pub last_health_check: i64,
}

impl EdgeNode {
    pub fn load_fraction(&self) -> f64 {
        if self.capacity == 0 {
            1.0
        } else {
            self.current_load as f64 / self.capacity as f64
        }
    }
}
