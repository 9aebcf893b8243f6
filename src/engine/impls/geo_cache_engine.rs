use std::collections::BTreeMap;
use std::sync::Arc;
use log::{debug, warn};
use serde_json::Value;
use crate::cache::structs::local_cache::LocalCache;
use crate::common::common::current_time;
use crate::config::structs::configuration::Configuration;
use crate::engine::structs::edge_node_status::EdgeNodeStatus;
use crate::engine::structs::geo_cache_engine::GeoCacheEngine;
use crate::engine::structs::geographic_stats::GeographicStats;
use crate::engine::structs::health_status::HealthStatus;
use crate::engine::structs::region_distribution::RegionDistribution;
use crate::geo::enums::node_status::NodeStatus;
use crate::geo::structs::geo_coordinate::GeoCoordinate;
use crate::geo::structs::geo_router::GeoRouter;
use crate::geo::structs::region::Region;
use crate::geo::structs::region_registry::RegionRegistry;

impl GeoCacheEngine {
    #[tracing::instrument(level = "debug", skip(config))]
    pub fn new(config: Arc<Configuration>) -> GeoCacheEngine
    {
        let registry = Arc::new(RegionRegistry::from_config(&config.regions));
        let router = GeoRouter::new(registry.clone(), config.routing.clone());

        let mut caches = BTreeMap::new();
        for region in &config.regions {
            for node in &region.edge_nodes {
                caches.insert(node.id.clone(), Arc::new(LocalCache::new(&config.cache)));
            }
        }

        GeoCacheEngine {
            config,
            registry,
            router,
            caches,
        }
    }

    /// Writes a value to the node closest to the client. Every failure is
    /// soft: validation, routing, and storage problems all come back as
    /// false, never as a panic or error value.
    pub fn cache_with_geographic_distribution(&self, key: &str, data: &Value, coordinate: Option<GeoCoordinate>, ttl: Option<u64>) -> bool {
        if key.is_empty() {
            warn!("[ENGINE] Rejected write with empty key");
            return false;
        }

        let decision = match self.router.route(coordinate.as_ref()) {
            Ok(decision) => decision,
            Err(error) => {
                warn!("[ENGINE] Write for key '{}' not routable: {}", key, error);
                return false;
            }
        };

        let Some(cache) = self.caches.get(&decision.node_id) else {
            return false;
        };
        if !cache.set(key, data, ttl, None) {
            return false;
        }
        self.registry.record_write(&decision.node_id);
        debug!("[ENGINE] Cached '{}' on node '{}' in region '{}'", key, decision.node_id, decision.region_id);
        true
    }

    /// Reads a value from the node the same coordinate routes to. Routing is
    /// consistent across calls with the same parameters, so a value written
    /// for a coordinate is retrievable from that coordinate as long as the
    /// topology health has not shifted. A routing failure is a miss.
    pub fn get_with_geographic_routing(&self, key: &str, coordinate: Option<GeoCoordinate>) -> Option<Value> {
        if key.is_empty() {
            return None;
        }

        let decision = match self.router.route(coordinate.as_ref()) {
            Ok(decision) => decision,
            Err(error) => {
                debug!("[ENGINE] Read for key '{}' not routable: {}", key, error);
                return None;
            }
        };

        let cache = self.caches.get(&decision.node_id)?;
        let value = cache.get(key);
        self.registry.record_read(&decision.node_id);
        value
    }

    /// Aggregates registry and per-node cache counters. The numbers are a
    /// consistent-enough snapshot for reporting, not a linearizable one.
    pub fn get_geographic_stats(&self) -> GeographicStats {
        let regions = self.registry.get_regions();

        let mut active_regions = 0u64;
        let mut latency_sum = 0.0f64;
        let mut active_nodes = 0u64;
        let mut distribution = Vec::with_capacity(regions.len());

        for region in &regions {
            let region_active = region.edge_nodes.iter()
                .filter(|node| node.status == NodeStatus::active)
                .count() as u64;
            if region_active > 0 {
                active_regions += 1;
            }
            for node in &region.edge_nodes {
                if node.status == NodeStatus::active {
                    latency_sum += node.latency_ms;
                    active_nodes += 1;
                }
            }

            let items: u64 = region.edge_nodes.iter()
                .filter_map(|node| self.caches.get(&node.id))
                .map(|cache| cache.get_stats().total_items)
                .sum();

            distribution.push(RegionDistribution {
                region_id: region.id.clone(),
                name: region.name.clone(),
                items,
                current_usage: region.current_usage,
                cache_capacity: region.cache_capacity,
                total_nodes: region.edge_nodes.len() as u64,
                active_nodes: region_active,
            });
        }

        let mut hits = 0u64;
        let mut accesses = 0u64;
        for cache in self.caches.values() {
            let stats = cache.get_stats();
            hits += stats.hit_count;
            accesses += stats.hit_count + stats.miss_count;
        }

        GeographicStats {
            total_regions: regions.len() as u64,
            active_regions,
            average_latency_ms: if active_nodes == 0 { 0.0 } else { latency_sum / active_nodes as f64 },
            cache_hit_rate: if accesses == 0 { 0.0 } else { hits as f64 / accesses as f64 },
            regional_distribution: distribution,
        }
    }

    /// Per-node load/latency summary for introspection.
    pub fn edge_node_status(&self) -> Vec<EdgeNodeStatus> {
        self.registry.get_edge_nodes().into_iter()
            .map(|node| EdgeNodeStatus {
                load_fraction: node.load_fraction(),
                node_id: node.id,
                region_id: node.region_id,
                hostname: node.hostname,
                status: node.status,
                latency_ms: node.latency_ms,
                current_load: node.current_load,
                capacity: node.capacity,
                last_health_check: node.last_health_check,
            })
            .collect()
    }

    /// Pure distance-based region lookup, reported separately from routing
    /// decisions.
    pub fn optimal_region(&self, latitude: f64, longitude: f64) -> Option<(String, Region)> {
        let coordinate = GeoCoordinate::new(latitude, longitude);
        let region_id = self.router.optimal_region(&coordinate)?;
        let regions = self.registry.regions.read();
        regions.get(&region_id).map(|region| (region_id.clone(), region.clone()))
    }

    /// True iff at least one edge node anywhere reports active.
    pub fn health_check(&self) -> bool {
        self.registry.get_edge_nodes().iter()
            .any(|node| node.status == NodeStatus::active)
    }

    pub fn health_status(&self) -> HealthStatus {
        HealthStatus {
            healthy: self.health_check(),
            timestamp: current_time(),
        }
    }

    /// Reclaims expired entries across every node cache. Returns the total
    /// number of entries removed.
    pub fn sweep_expired(&self) -> usize {
        let mut removed = 0;
        for (node_id, cache) in &self.caches {
            let swept = cache.sweep_expired();
            if swept > 0 {
                debug!("[ENGINE] Swept {} expired entries from node '{}'", swept, node_id);
            }
            removed += swept;
        }
        removed
    }
}
