use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RoutingConfig {
    /// Weight of observed node latency in the selection score.
    pub latency_weight: f64,
    /// Weight of the node load fraction in the selection score.
    pub load_weight: f64,
    /// Region served when a request carries no coordinate.
    pub default_region: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            latency_weight: 0.7,
            load_weight: 0.3,
            default_region: String::new(),
        }
    }
}
