use std::sync::Arc;
use log::debug;
use crate::config::structs::routing_config::RoutingConfig;
use crate::geo::enums::node_status::NodeStatus;
use crate::geo::errors::RoutingError;
use crate::geo::structs::edge_node::EdgeNode;
use crate::geo::structs::geo_coordinate::GeoCoordinate;
use crate::geo::structs::geo_router::GeoRouter;
use crate::geo::structs::region_registry::RegionRegistry;
use crate::geo::structs::route_decision::RouteDecision;

impl GeoRouter {
    pub fn new(registry: Arc<RegionRegistry>, config: RoutingConfig) -> GeoRouter {
        GeoRouter { registry, config }
    }

    /// Selects the serving node for a request. Regions are tried in distance
    /// order (or default-first without a coordinate); a region with no
    /// active node falls through to the next one.
    pub fn route(&self, coordinate: Option<&GeoCoordinate>) -> Result<RouteDecision, RoutingError> {
        if let Some(coord) = coordinate {
            if !coord.is_valid() {
                return Err(RoutingError::InvalidCoordinate(format!(
                    "({}, {}) is not a usable latitude/longitude pair",
                    coord.latitude, coord.longitude
                )));
            }
        }

        let regions = self.registry.regions.read();
        let candidate_order = match coordinate {
            Some(coord) => {
                let mut ordered: Vec<(f64, &str)> = regions.values()
                    .map(|region| (coord.distance_km(&region.location), region.id.as_str()))
                    .collect();
                ordered.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(b.1)));
                ordered.into_iter().map(|(_, id)| id.to_string()).collect::<Vec<String>>()
            }
            None => self.default_order(),
        };

        for region_id in &candidate_order {
            let Some(region) = regions.get(region_id) else {
                continue;
            };
            if let Some(node) = self.select_node(&region.edge_nodes) {
                debug!("[ROUTE] Selected node '{}' in region '{}'", node.id, region.id);
                return Ok(RouteDecision {
                    region_id: region.id.clone(),
                    node_id: node.id.clone(),
                });
            }
        }

        Err(RoutingError::NoCapacity)
    }

    /// Pure distance-based region selection without the node-health filter,
    /// used for introspection and reporting.
    pub fn optimal_region(&self, coordinate: &GeoCoordinate) -> Option<String> {
        if !coordinate.is_valid() {
            return None;
        }
        let regions = self.registry.regions.read();
        regions.values()
            .map(|region| (coordinate.distance_km(&region.location), region.id.as_str()))
            .min_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(b.1)))
            .map(|(_, id)| id.to_string())
    }

    /// Among active nodes, picks the one minimizing the weighted score of
    /// latency and load fraction. The load fraction shares units with
    /// milliseconds by scaling to 0..100. Ties break on the lowest id.
    fn select_node<'a>(&self, nodes: &'a [EdgeNode]) -> Option<&'a EdgeNode> {
        nodes.iter()
            .filter(|node| node.status == NodeStatus::active)
            .min_by(|a, b| {
                self.score(a).total_cmp(&self.score(b))
                    .then_with(|| a.id.cmp(&b.id))
            })
    }

    fn score(&self, node: &EdgeNode) -> f64 {
        // load contributes in 10% steps so per-request accounting cannot
        // flip an otherwise stable decision between a write and its read
        let load_bucket = (node.load_fraction().clamp(0.0, 1.0) * 10.0).floor() / 10.0;
        self.config.latency_weight * node.latency_ms
            + self.config.load_weight * load_bucket * 100.0
    }

    /// Configured default region first, remaining regions in configuration
    /// order. Deterministic even when default_region names no known region.
    fn default_order(&self) -> Vec<String> {
        let mut order: Vec<String> = Vec::with_capacity(self.registry.region_order.len());
        if self.registry.region_order.contains(&self.config.default_region) {
            order.push(self.config.default_region.clone());
        }
        for region_id in &self.registry.region_order {
            if !order.contains(region_id) {
                order.push(region_id.clone());
            }
        }
        order
    }
}
