use std::sync::Arc;
use crate::config::structs::routing_config::RoutingConfig;
use crate::geo::structs::region_registry::RegionRegistry;

pub struct GeoRouter {
    pub registry: Arc<RegionRegistry>,
    pub config: RoutingConfig,
}
