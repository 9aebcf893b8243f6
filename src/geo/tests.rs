#[cfg(test)]
mod geo_tests {
    use std::sync::Arc;
    use crate::config::structs::configuration::Configuration;
    use crate::config::structs::routing_config::RoutingConfig;
    use crate::geo::structs::geo_router::GeoRouter;
    use crate::geo::structs::region_registry::RegionRegistry;

    fn test_registry() -> Arc<RegionRegistry> {
        Arc::new(RegionRegistry::from_config(&Configuration::init().regions))
    }

    fn test_router(registry: Arc<RegionRegistry>) -> GeoRouter {
        GeoRouter::new(registry, RoutingConfig {
            latency_weight: 0.7,
            load_weight: 0.3,
            default_region: String::from("eu-central"),
        })
    }

    mod coordinate_tests {
        use crate::geo::structs::geo_coordinate::GeoCoordinate;

        #[test]
        fn test_haversine_istanbul_london() {
            let istanbul = GeoCoordinate::new(41.0, 29.0);
            let london = GeoCoordinate::new(51.5, -0.1);
            let distance = istanbul.distance_km(&london);
            // roughly 2500 km apart
            assert!((2400.0..2600.0).contains(&distance), "distance was {distance}");
        }

        #[test]
        fn test_distance_to_self_is_zero() {
            let point = GeoCoordinate::new(41.0, 29.0);
            assert!(point.distance_km(&point) < 1e-9);
        }

        #[test]
        fn test_distance_is_symmetric() {
            let a = GeoCoordinate::new(41.0, 29.0);
            let b = GeoCoordinate::new(51.5, -0.1);
            assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < 1e-9);
        }

        #[test]
        fn test_validity_bounds() {
            assert!(GeoCoordinate::new(41.0, 29.0).is_valid());
            assert!(!GeoCoordinate::new(91.0, 0.0).is_valid());
            assert!(!GeoCoordinate::new(0.0, 181.0).is_valid());
            assert!(!GeoCoordinate::new(f64::NAN, 0.0).is_valid());
        }
    }

    mod registry_tests {
        use crate::geo::enums::node_status::NodeStatus;
        use super::test_registry;

        #[test]
        fn test_from_config_builds_topology() {
            let registry = test_registry();
            let regions = registry.get_regions();
            assert_eq!(regions.len(), 2);
            assert_eq!(regions[0].id, "eu-central");
            assert_eq!(registry.get_edge_nodes().len(), 4);
        }

        #[test]
        fn test_nodes_start_active() {
            let registry = test_registry();
            for node in registry.get_edge_nodes() {
                assert_eq!(node.status, NodeStatus::active);
                assert_eq!(node.last_health_check, 0);
            }
        }

        #[test]
        fn test_update_node_health_mutates_in_place() {
            let registry = test_registry();
            registry.update_node_health("eu-west-1", NodeStatus::inactive, 87.5, 12);
            let node = registry.get_edge_nodes().into_iter()
                .find(|n| n.id == "eu-west-1")
                .unwrap();
            assert_eq!(node.status, NodeStatus::inactive);
            assert_eq!(node.latency_ms, 87.5);
            assert_eq!(node.current_load, 12);
            assert!(node.last_health_check > 0);
        }

        #[test]
        fn test_update_unknown_node_is_ignored() {
            let registry = test_registry();
            registry.update_node_health("ghost", NodeStatus::inactive, 1.0, 1);
            assert_eq!(registry.get_edge_nodes().len(), 4);
        }

        #[test]
        fn test_record_write_bumps_node_and_region() {
            let registry = test_registry();
            registry.record_write("eu-central-1");
            registry.record_write("eu-central-1");
            let regions = registry.get_regions();
            let region = regions.iter().find(|r| r.id == "eu-central").unwrap();
            assert_eq!(region.current_usage, 2);
            let node = region.edge_nodes.iter().find(|n| n.id == "eu-central-1").unwrap();
            assert_eq!(node.current_load, 2);
        }

        #[test]
        fn test_record_read_bumps_node_only() {
            let registry = test_registry();
            registry.record_read("eu-central-1");
            let regions = registry.get_regions();
            let region = regions.iter().find(|r| r.id == "eu-central").unwrap();
            assert_eq!(region.current_usage, 0);
            assert_eq!(registry.node_load("eu-central-1"), 1);
        }
    }

    mod router_tests {
        use crate::geo::enums::node_status::NodeStatus;
        use crate::geo::structs::geo_coordinate::GeoCoordinate;
        use super::{test_registry, test_router};

        #[test]
        fn test_nearest_region_wins() {
            let registry = test_registry();
            let router = test_router(registry);
            // strictly closer to Istanbul than to London
            let decision = router.route(Some(&GeoCoordinate::new(41.01, 29.01))).unwrap();
            assert_eq!(decision.region_id, "eu-central");
        }

        #[test]
        fn test_routing_is_deterministic() {
            let registry = test_registry();
            let router = test_router(registry);
            let coord = GeoCoordinate::new(48.8, 2.3);
            let first = router.route(Some(&coord)).unwrap();
            for _ in 0..5 {
                assert_eq!(router.route(Some(&coord)).unwrap(), first);
            }
        }

        #[test]
        fn test_no_coordinate_uses_default_region() {
            let registry = test_registry();
            let router = test_router(registry);
            let decision = router.route(None).unwrap();
            assert_eq!(decision.region_id, "eu-central");
        }

        #[test]
        fn test_inactive_nodes_excluded_with_fallback() {
            let registry = test_registry();
            registry.update_node_health("eu-central-1", NodeStatus::inactive, 0.0, 0);
            registry.update_node_health("eu-central-2", NodeStatus::inactive, 0.0, 0);
            let router = test_router(registry);
            let decision = router.route(Some(&GeoCoordinate::new(41.01, 29.01))).unwrap();
            assert_eq!(decision.region_id, "eu-west");
        }

        #[test]
        fn test_no_capacity_when_everything_inactive() {
            let registry = test_registry();
            for node in registry.get_edge_nodes() {
                registry.update_node_health(&node.id, NodeStatus::inactive, 0.0, 0);
            }
            let router = test_router(registry);
            assert!(router.route(Some(&GeoCoordinate::new(41.0, 29.0))).is_err());
            assert!(router.route(None).is_err());
        }

        #[test]
        fn test_invalid_coordinate_rejected() {
            let registry = test_registry();
            let router = test_router(registry);
            assert!(router.route(Some(&GeoCoordinate::new(200.0, 0.0))).is_err());
        }

        #[test]
        fn test_node_scoring_prefers_low_latency() {
            let registry = test_registry();
            registry.update_node_health("eu-central-1", NodeStatus::active, 250.0, 0);
            registry.update_node_health("eu-central-2", NodeStatus::active, 5.0, 0);
            let router = test_router(registry);
            let decision = router.route(None).unwrap();
            assert_eq!(decision.node_id, "eu-central-2");
        }

        #[test]
        fn test_node_scoring_penalizes_load() {
            let registry = test_registry();
            // equal latency, one node saturated
            registry.update_node_health("eu-central-1", NodeStatus::active, 10.0, 5000);
            registry.update_node_health("eu-central-2", NodeStatus::active, 10.0, 0);
            let router = test_router(registry);
            let decision = router.route(None).unwrap();
            assert_eq!(decision.node_id, "eu-central-2");
        }

        #[test]
        fn test_tie_breaks_on_lowest_node_id() {
            let registry = test_registry();
            let router = test_router(registry);
            // fresh topology: identical latency and load everywhere
            let decision = router.route(None).unwrap();
            assert_eq!(decision.node_id, "eu-central-1");
        }

        #[test]
        fn test_routing_stable_under_light_load_accounting() {
            let registry = test_registry();
            let router = test_router(registry.clone());
            let first = router.route(None).unwrap();
            for _ in 0..20 {
                registry.record_write(&first.node_id);
                assert_eq!(router.route(None).unwrap(), first);
            }
        }

        #[test]
        fn test_optimal_region_ignores_health() {
            let registry = test_registry();
            registry.update_node_health("eu-central-1", NodeStatus::inactive, 0.0, 0);
            registry.update_node_health("eu-central-2", NodeStatus::inactive, 0.0, 0);
            let router = test_router(registry);
            let optimal = router.optimal_region(&GeoCoordinate::new(41.01, 29.01)).unwrap();
            assert_eq!(optimal, "eu-central");
        }
    }
}
