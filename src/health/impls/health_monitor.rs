use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use log::{debug, info, warn};
use parking_lot::RwLock;
use tokio::net::TcpStream;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use crate::config::structs::health_check_config::HealthCheckConfig;
use crate::geo::enums::node_status::NodeStatus;
use crate::geo::structs::region_registry::RegionRegistry;
use crate::health::errors::ProbeError;
use crate::health::structs::health_monitor::HealthMonitor;

impl HealthMonitor {
    pub fn new(registry: Arc<RegionRegistry>, config: HealthCheckConfig) -> HealthMonitor {
        let (stop_tx, stop_rx) = watch::channel(false);
        HealthMonitor {
            registry,
            config,
            failures: RwLock::new(BTreeMap::new()),
            stop_tx,
            stop_rx,
        }
    }

    /// Spawns the probe loop. The loop stops scheduling new rounds once
    /// stop() is called; an in-flight round finishes first.
    pub fn start(self: &Arc<Self>) -> JoinHandle<()> {
        let monitor = self.clone();
        let mut stop_rx = self.stop_rx.clone();
        tokio::spawn(async move {
            info!("[HEALTH] Starting monitor with {} seconds interval...", monitor.config.check_interval);
            let mut interval = tokio::time::interval(Duration::from_secs(monitor.config.check_interval));
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        monitor.check_all_nodes().await;
                    }
                    _ = stop_rx.changed() => {
                        info!("[HEALTH] Shutting down monitor...");
                        return;
                    }
                }
            }
        })
    }

    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }

    /// One probe round over every node in the registry.
    pub async fn check_all_nodes(&self) {
        let nodes = self.registry.get_edge_nodes();
        for node in nodes {
            match self.probe(&node.hostname).await {
                Ok(latency_ms) => {
                    if node.status == NodeStatus::inactive {
                        info!("[HEALTH] Node '{}' recovered ({:.1}ms)", node.id, latency_ms);
                    }
                    self.failures.write().remove(&node.id);
                    // load drains between rounds
                    let drained_load = self.registry.node_load(&node.id) / 2;
                    self.registry.update_node_health(&node.id, NodeStatus::active, latency_ms, drained_load);
                }
                Err(error) => {
                    let consecutive = {
                        let mut failures = self.failures.write();
                        let counter = failures.entry(node.id.clone()).or_insert(0);
                        *counter += 1;
                        *counter
                    };
                    warn!("[HEALTH] Probe of node '{}' failed ({}/{}): {}", node.id, consecutive, self.config.failure_threshold, error);
                    if consecutive >= self.config.failure_threshold {
                        self.registry.update_node_health(&node.id, NodeStatus::inactive, node.latency_ms, node.current_load);
                    }
                }
            }
        }
        debug!("[HEALTH] Probe round complete");
    }

    /// TCP connect with a deadline, returning the measured round trip in
    /// milliseconds.
    pub async fn probe(&self, hostname: &str) -> Result<f64, ProbeError> {
        let deadline = Duration::from_millis(self.config.probe_timeout_ms);
        let started = Instant::now();
        match tokio::time::timeout(deadline, TcpStream::connect(hostname)).await {
            Ok(Ok(_stream)) => Ok(started.elapsed().as_secs_f64() * 1000.0),
            Ok(Err(error)) => Err(ProbeError::Io(error)),
            Err(_) => Err(ProbeError::Timeout(self.config.probe_timeout_ms)),
        }
    }
}
