//! Geographic topology and routing module.
//!
//! Holds the static region/edge-node registry built from configuration at
//! startup and the router that picks a serving node for a client
//! coordinate.
//!
//! # Routing
//!
//! Regions are ordered by great-circle distance to the client coordinate
//! (or the configured default region when no coordinate is supplied).
//! Within a region only active nodes are candidates, scored by a weighted
//! sum of observed latency and load fraction; ties break on the lowest node
//! id so the same input always yields the same decision.

/// Node status enumeration (active, inactive).
pub mod enums;

/// Error types for routing decisions.
pub mod errors;

/// Implementation blocks for the registry and router.
pub mod impls;

/// Data structures for regions, nodes, and the router.
pub mod structs;

#[cfg(test)]
mod tests;
