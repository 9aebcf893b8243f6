use std::collections::BTreeMap;
use std::sync::Arc;
use crate::cache::structs::local_cache::LocalCache;
use crate::config::structs::configuration::Configuration;
use crate::geo::structs::geo_router::GeoRouter;
use crate::geo::structs::region_registry::RegionRegistry;

pub struct GeoCacheEngine {
    pub config: Arc<Configuration>,
    pub registry: Arc<RegionRegistry>,
    pub router: GeoRouter,
    /// One local cache per edge node, fixed at startup.
    pub caches: BTreeMap<String, Arc<LocalCache>>,
}
