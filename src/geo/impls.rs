//! Implementation blocks for the registry and router.

/// Distance math for coordinates.
pub mod geo_coordinate;

/// Node selection logic.
pub mod geo_router;

/// Registry construction and mutation.
pub mod region_registry;
