//! Node status enumeration.

/// Health state of an edge node.
pub mod node_status;
