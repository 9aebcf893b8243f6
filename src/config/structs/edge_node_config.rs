use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EdgeNodeConfig {
    pub id: String,
    /// Probe target as host:port.
    pub hostname: String,
    /// Load units this node can carry.
    pub capacity: u64,
}
