// Integration tests for TTL and compression behavior at the boundary

mod common;

use std::time::Duration;
use serde_json::json;

#[tokio::test]
async fn test_ttl_expiry_through_engine() {
    let engine = common::create_test_engine();
    let key = common::random_key("ttl");

    engine.cache_with_geographic_distribution(&key, &json!("short lived"), Some(common::istanbul()), Some(1));
    assert!(engine.get_with_geographic_routing(&key, Some(common::istanbul())).is_some());

    tokio::time::sleep(Duration::from_millis(1100)).await;
    assert_eq!(engine.get_with_geographic_routing(&key, Some(common::istanbul())), None);
}

#[tokio::test]
async fn test_compression_transparent_through_engine() {
    let engine = common::create_test_engine();
    let key = common::random_key("large");
    let payload = "lorem ipsum dolor sit amet ".repeat(400);

    assert!(engine.cache_with_geographic_distribution(&key, &json!(payload.clone()), None, Some(60)));
    let cached = engine.get_with_geographic_routing(&key, None).unwrap();
    assert_eq!(cached, json!(payload));
}

#[tokio::test]
async fn test_null_payload_round_trip() {
    let engine = common::create_test_engine();
    let key = common::random_key("null");
    assert!(engine.cache_with_geographic_distribution(&key, &serde_json::Value::Null, None, Some(60)));
    assert_eq!(engine.get_with_geographic_routing(&key, None), Some(serde_json::Value::Null));
}

#[tokio::test]
async fn test_default_ttl_applies() {
    let engine = common::create_test_engine();
    let key = common::random_key("default-ttl");
    // no TTL supplied: configured default of 300 seconds applies
    engine.cache_with_geographic_distribution(&key, &json!(1), None, None);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(engine.get_with_geographic_routing(&key, None).is_some());
}

#[tokio::test]
async fn test_sweep_through_engine() {
    let engine = common::create_test_engine();
    engine.cache_with_geographic_distribution("sweep:short", &json!(1), None, Some(1));
    engine.cache_with_geographic_distribution("sweep:long", &json!(2), None, Some(120));

    tokio::time::sleep(Duration::from_millis(1100)).await;
    assert_eq!(engine.sweep_expired(), 1);

    let stats = engine.get_geographic_stats();
    let total_items: u64 = stats.regional_distribution.iter().map(|d| d.items).sum();
    assert_eq!(total_items, 1);
}
