use std::collections::BTreeMap;
use std::sync::Arc;
use parking_lot::RwLock;
use tokio::sync::watch;
use crate::config::structs::health_check_config::HealthCheckConfig;
use crate::geo::structs::region_registry::RegionRegistry;

pub struct HealthMonitor {
    pub registry: Arc<RegionRegistry>,
    pub config: HealthCheckConfig,
    /// Consecutive failed probes per node id.
    pub failures: RwLock<BTreeMap<String, u32>>,
    pub stop_tx: watch::Sender<bool>,
    pub stop_rx: watch::Receiver<bool>,
}
