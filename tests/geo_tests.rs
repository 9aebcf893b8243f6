// Integration tests for geographic routing guarantees

mod common;

use serde_json::json;
use edgecache::geo::enums::node_status::NodeStatus;

#[tokio::test]
async fn test_closer_coordinate_routes_to_closer_region() {
    let engine = common::create_test_engine();

    engine.cache_with_geographic_distribution("near-istanbul", &json!(1), Some(common::istanbul()), None);
    engine.cache_with_geographic_distribution("near-london", &json!(2), Some(common::london()), None);

    let stats = engine.get_geographic_stats();
    for region in &stats.regional_distribution {
        assert_eq!(region.items, 1, "region {} should hold exactly one item", region.region_id);
    }
}

#[tokio::test]
async fn test_failover_to_next_nearest_region() {
    let engine = common::create_test_engine();

    // take the nearest region down entirely
    engine.registry.update_node_health("eu-central-1", NodeStatus::inactive, 0.0, 0);
    engine.registry.update_node_health("eu-central-2", NodeStatus::inactive, 0.0, 0);

    assert!(engine.cache_with_geographic_distribution("failover", &json!(1), Some(common::istanbul()), None));
    let stats = engine.get_geographic_stats();
    let london = stats.regional_distribution.iter().find(|d| d.region_id == "eu-west").unwrap();
    assert_eq!(london.items, 1);
}

#[tokio::test]
async fn test_routing_survives_registry_reads() {
    let engine = common::create_test_engine();
    let coord = common::istanbul();

    engine.cache_with_geographic_distribution("stable", &json!(1), Some(coord), None);
    for _ in 0..10 {
        // introspection reads do not disturb routing
        let _ = engine.edge_node_status();
        let _ = engine.get_geographic_stats();
        assert_eq!(engine.get_with_geographic_routing("stable", Some(coord)), Some(json!(1)));
    }
}

#[tokio::test]
async fn test_registry_snapshots_are_copies() {
    let engine = common::create_test_engine();
    let mut snapshot = engine.registry.get_regions();
    snapshot[0].current_usage = 999;
    // mutating the snapshot does not touch the registry
    assert_eq!(engine.registry.get_regions()[0].current_usage, 0);
}
