use serde::{Deserialize, Serialize};
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::health_check_config::HealthCheckConfig;
use crate::config::structs::region_config::RegionConfig;
use crate::config::structs::routing_config::RoutingConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub cache: CacheConfig,
    pub routing: RoutingConfig,
    pub health: HealthCheckConfig,
    pub regions: Vec<RegionConfig>,
}
