use serde::{Deserialize, Serialize};

/// Point-in-time view of a node cache. All fields are zero for a cache that
/// has never been touched, never null or NaN.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct CacheStats {
    pub total_items: u64,
    pub hit_count: u64,
    pub miss_count: u64,
    pub hit_rate: f64,
    /// Approximate bytes held by keys and stored values.
    pub memory_usage: u64,
}
