//! Cache orchestrator module.
//!
//! The public contract of the crate: combines the geographic router with
//! every node's local cache to implement geographically distributed writes
//! and reads, and aggregates statistics across all nodes and regions.
//!
//! # Boundary contract
//!
//! All errors are contained here and converted to boolean or optional
//! results. A routing failure means "not cached", never "request failed";
//! consumers treat a miss and an error identically and recompute from their
//! source of truth.

/// Implementation blocks for the orchestrator.
pub mod impls;

/// Engine and boundary response structures.
pub mod structs;
