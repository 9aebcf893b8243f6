use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CacheEntry {
    /// Encoded payload, possibly compressed.
    pub value: Vec<u8>,
    pub compressed: bool,
    /// Unix milliseconds.
    pub created_at: i64,
    /// Unix milliseconds, always greater than created_at.
    pub expires_at: i64,
    pub hit_count: u64,
    /// Telemetry tag only, does not affect retrieval.
    pub session_id: Option<String>,
}

impl CacheEntry {
    pub fn is_expired(&self, now_millis: i64) -> bool {
        self.expires_at <= now_millis
    }
}
