use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthCheckConfig {
    /// Seconds between probe rounds.
    pub check_interval: u64,
    /// Deadline in milliseconds for a single node probe.
    pub probe_timeout_ms: u64,
    /// Consecutive failed probes before a node is marked inactive.
    pub failure_threshold: u32,
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        Self {
            check_interval: 30,
            probe_timeout_ms: 2000,
            failure_threshold: 3,
        }
    }
}
