//! Geographic data structures.

/// A single cache-serving instance within a region.
pub mod edge_node;

/// A latitude/longitude pair.
pub mod geo_coordinate;

/// The node selector.
pub mod geo_router;

/// A geographic grouping of edge nodes.
pub mod region;

/// Shared topology state.
pub mod region_registry;

/// Routing outcome carrying the chosen region and node.
pub mod route_decision;
