use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteDecision {
    pub region_id: String,
    pub node_id: String,
}
