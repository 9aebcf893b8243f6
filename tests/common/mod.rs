#![allow(dead_code)]
use rand::RngExt;
use std::sync::Arc;
use edgecache::config::structs::configuration::Configuration;
use edgecache::engine::structs::geo_cache_engine::GeoCacheEngine;
use edgecache::geo::structs::geo_coordinate::GeoCoordinate;

pub type TestEngine = Arc<GeoCacheEngine>;
pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> TestConfig {
    Arc::new(Configuration::init())
}

pub fn create_test_engine() -> TestEngine {
    Arc::new(GeoCacheEngine::new(create_test_config()))
}

pub fn istanbul() -> GeoCoordinate {
    GeoCoordinate::new(41.01, 29.01)
}

pub fn london() -> GeoCoordinate {
    GeoCoordinate::new(51.4, 0.0)
}

pub fn random_key(prefix: &str) -> String {
    let mut rng = rand::rng();
    let suffix: u64 = rng.random();
    format!("{prefix}:{suffix}")
}
