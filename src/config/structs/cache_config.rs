use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CacheConfig {
    /// Fallback TTL in seconds for writes that do not carry their own.
    pub default_ttl: u64,
    /// Serialized payloads above this size in bytes are compressed.
    pub compression_threshold: usize,
    /// Whether clear() also resets the lifetime hit/miss counters.
    pub reset_counters_on_clear: bool,
    /// Interval in seconds for the expired-entry sweep, 0 disables it.
    pub sweep_interval: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: 300,
            compression_threshold: 1024,
            reset_counters_on_clear: false,
            sweep_interval: 0,
        }
    }
}
