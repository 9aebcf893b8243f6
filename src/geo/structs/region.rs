use serde::{Deserialize, Serialize};
use crate::geo::structs::edge_node::EdgeNode;
use crate::geo::structs::geo_coordinate::GeoCoordinate;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub country: String,
    /// Representative point for distance routing.
    pub location: GeoCoordinate,
    pub cache_capacity: u64,
    /// Soft target: may exceed cache_capacity, surfaced in statistics.
    pub current_usage: u64,
    pub edge_nodes: Vec<EdgeNode>,
}
