use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthStatus {
    pub healthy: bool,
    /// Unix seconds.
    pub timestamp: i64,
}
