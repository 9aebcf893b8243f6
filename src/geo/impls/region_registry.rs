use std::collections::BTreeMap;
use log::debug;
use parking_lot::RwLock;
use crate::common::common::current_time;
use crate::config::structs::region_config::RegionConfig;
use crate::geo::enums::node_status::NodeStatus;
use crate::geo::structs::edge_node::EdgeNode;
use crate::geo::structs::geo_coordinate::GeoCoordinate;
use crate::geo::structs::region::Region;
use crate::geo::structs::region_registry::RegionRegistry;

impl RegionRegistry {
    /// Builds the topology from configuration. Nodes start active with no
    /// observed latency; the health monitor refines both from its first
    /// probe round onward.
    pub fn from_config(regions: &[RegionConfig]) -> RegionRegistry {
        let mut map = BTreeMap::new();
        let mut region_order = Vec::new();
        let mut node_index = BTreeMap::new();

        for region_config in regions {
            let edge_nodes = region_config.edge_nodes.iter().map(|node_config| {
                node_index.insert(node_config.id.clone(), region_config.id.clone());
                EdgeNode {
                    id: node_config.id.clone(),
                    region_id: region_config.id.clone(),
                    hostname: node_config.hostname.clone(),
                    status: NodeStatus::active,
                    latency_ms: 0.0,
                    current_load: 0,
                    capacity: node_config.capacity,
                    last_health_check: 0,
                }
            }).collect();

            region_order.push(region_config.id.clone());
            map.insert(region_config.id.clone(), Region {
                id: region_config.id.clone(),
                name: region_config.name.clone(),
                country: region_config.country.clone(),
                location: GeoCoordinate::new(region_config.latitude, region_config.longitude),
                cache_capacity: region_config.cache_capacity,
                current_usage: 0,
                edge_nodes,
            });
        }

        RegionRegistry {
            regions: RwLock::new(map),
            region_order,
            node_index,
        }
    }

    /// Read-only snapshot of all regions in configuration order.
    pub fn get_regions(&self) -> Vec<Region> {
        let regions = self.regions.read();
        self.region_order.iter()
            .filter_map(|id| regions.get(id).cloned())
            .collect()
    }

    /// Read-only snapshot of every node across all regions.
    pub fn get_edge_nodes(&self) -> Vec<EdgeNode> {
        self.get_regions().into_iter()
            .flat_map(|region| region.edge_nodes)
            .collect()
    }

    /// Health monitor entry point: overwrites status, latency, and load of
    /// a node in place and stamps the probe time.
    pub fn update_node_health(&self, node_id: &str, status: NodeStatus, latency_ms: f64, current_load: u64) {
        let Some(region_id) = self.node_index.get(node_id) else {
            return;
        };
        let mut regions = self.regions.write();
        if let Some(region) = regions.get_mut(region_id) {
            if let Some(node) = region.edge_nodes.iter_mut().find(|n| n.id == node_id) {
                if node.status != status {
                    debug!("[REGISTRY] Node '{}' transitions {} -> {}", node_id, node.status, status);
                }
                node.status = status;
                node.latency_ms = latency_ms;
                node.current_load = current_load;
                node.last_health_check = current_time();
            }
        }
    }

    /// Write-path load accounting: one unit on the node and its region.
    pub fn record_write(&self, node_id: &str) {
        let Some(region_id) = self.node_index.get(node_id) else {
            return;
        };
        let mut regions = self.regions.write();
        if let Some(region) = regions.get_mut(region_id) {
            region.current_usage = region.current_usage.saturating_add(1);
            if let Some(node) = region.edge_nodes.iter_mut().find(|n| n.id == node_id) {
                node.current_load = node.current_load.saturating_add(1);
            }
        }
    }

    /// Read-path load accounting: one unit on the node only.
    pub fn record_read(&self, node_id: &str) {
        let Some(region_id) = self.node_index.get(node_id) else {
            return;
        };
        let mut regions = self.regions.write();
        if let Some(region) = regions.get_mut(region_id) {
            if let Some(node) = region.edge_nodes.iter_mut().find(|n| n.id == node_id) {
                node.current_load = node.current_load.saturating_add(1);
            }
        }
    }

    /// Current load of a node, for the health monitor's decay calculation.
    pub fn node_load(&self, node_id: &str) -> u64 {
        let Some(region_id) = self.node_index.get(node_id) else {
            return 0;
        };
        let regions = self.regions.read();
        regions.get(region_id)
            .and_then(|region| region.edge_nodes.iter().find(|n| n.id == node_id))
            .map(|node| node.current_load)
            .unwrap_or(0)
    }
}
