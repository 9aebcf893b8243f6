use std::collections::BTreeMap;
use std::sync::atomic::Ordering;
use log::{debug, warn};
use lz4_flex::block::{compress_prepend_size, decompress_size_prepended};
use parking_lot::RwLock;
use serde_json::Value;
use crate::cache::structs::cache_entry::CacheEntry;
use crate::cache::structs::cache_stats::CacheStats;
use crate::cache::structs::cache_stats_atomics::CacheStatsAtomics;
use crate::cache::structs::json_codec::JsonCodec;
use crate::cache::structs::local_cache::LocalCache;
use crate::cache::traits::payload_codec::PayloadCodec;
use crate::common::common::current_time_millis;
use crate::config::structs::cache_config::CacheConfig;

impl LocalCache {
    pub fn new(config: &CacheConfig) -> LocalCache {
        LocalCache::with_codec(config, Box::new(JsonCodec))
    }

    pub fn with_codec(config: &CacheConfig, codec: Box<dyn PayloadCodec>) -> LocalCache {
        LocalCache {
            entries: RwLock::new(BTreeMap::new()),
            stats: CacheStatsAtomics::default(),
            codec,
            compression_threshold: config.compression_threshold,
            default_ttl: config.default_ttl,
            reset_counters_on_clear: config.reset_counters_on_clear,
        }
    }

    /// Stores a value under a key. The TTL falls back to the configured
    /// default when not supplied and is clamped to at least one second so
    /// that `expires_at > created_at` always holds. Returns false only when
    /// the payload cannot be encoded.
    pub fn set(&self, key: &str, value: &Value, ttl_seconds: Option<u64>, session_id: Option<&str>) -> bool {
        let encoded = match self.codec.encode(value) {
            Ok(data) => data,
            Err(error) => {
                warn!("[CACHE] Failed to encode value for key '{}': {}", key, error);
                return false;
            }
        };

        let (stored, compressed) = if encoded.len() > self.compression_threshold {
            let packed = compress_prepend_size(&encoded);
            if packed.len() < encoded.len() {
                (packed, true)
            } else {
                (encoded, false)
            }
        } else {
            (encoded, false)
        };

        let ttl = ttl_seconds.unwrap_or(self.default_ttl).max(1);
        let now = current_time_millis();
        let entry = CacheEntry {
            value: stored,
            compressed,
            created_at: now,
            expires_at: now + (ttl * 1000) as i64,
            hit_count: 0,
            session_id: session_id.map(|s| s.to_string()),
        };

        let cost = Self::entry_cost(key, &entry);
        let mut entries = self.entries.write();
        if let Some(previous) = entries.insert(key.to_string(), entry) {
            let freed = key.len() as u64 + previous.value.len() as u64;
            self.stats.memory_bytes.fetch_sub(freed, Ordering::SeqCst);
        }
        self.stats.memory_bytes.fetch_add(cost, Ordering::SeqCst);
        true
    }

    /// Looks up a key. Absent covers the empty key, a missing key, and an
    /// expired entry; the expired entry is removed on the spot and counted
    /// as a miss.
    pub fn get(&self, key: &str) -> Option<Value> {
        if key.is_empty() {
            self.stats.misses.fetch_add(1, Ordering::SeqCst);
            return None;
        }

        let now = current_time_millis();
        let mut entries = self.entries.write();
        match entries.get_mut(key) {
            None => {
                self.stats.misses.fetch_add(1, Ordering::SeqCst);
                None
            }
            Some(entry) if entry.is_expired(now) => {
                let freed = key.len() as u64 + entry.value.len() as u64;
                entries.remove(key);
                self.stats.memory_bytes.fetch_sub(freed, Ordering::SeqCst);
                self.stats.misses.fetch_add(1, Ordering::SeqCst);
                None
            }
            Some(entry) => {
                entry.hit_count += 1;
                let raw = if entry.compressed {
                    match decompress_size_prepended(&entry.value) {
                        Ok(data) => data,
                        Err(error) => {
                            warn!("[CACHE] Failed to decompress key '{}': {}", key, error);
                            self.stats.misses.fetch_add(1, Ordering::SeqCst);
                            return None;
                        }
                    }
                } else {
                    entry.value.clone()
                };
                match self.codec.decode(&raw) {
                    Ok(value) => {
                        self.stats.hits.fetch_add(1, Ordering::SeqCst);
                        Some(value)
                    }
                    Err(error) => {
                        warn!("[CACHE] Failed to decode key '{}': {}", key, error);
                        self.stats.misses.fetch_add(1, Ordering::SeqCst);
                        None
                    }
                }
            }
        }
    }

    pub fn delete(&self, key: &str) -> bool {
        let mut entries = self.entries.write();
        match entries.remove(key) {
            None => false,
            Some(entry) => {
                let freed = key.len() as u64 + entry.value.len() as u64;
                self.stats.memory_bytes.fetch_sub(freed, Ordering::SeqCst);
                true
            }
        }
    }

    /// Drops every entry. Lifetime hit/miss counters survive unless
    /// configured otherwise.
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        let removed = entries.len();
        entries.clear();
        self.stats.memory_bytes.store(0, Ordering::SeqCst);
        if self.reset_counters_on_clear {
            self.stats.hits.store(0, Ordering::SeqCst);
            self.stats.misses.store(0, Ordering::SeqCst);
        }
        debug!("[CACHE] Cleared {} entries", removed);
    }

    pub fn get_stats(&self) -> CacheStats {
        let total_items = self.entries.read().len() as u64;
        let hit_count = self.stats.hits.load(Ordering::SeqCst);
        let miss_count = self.stats.misses.load(Ordering::SeqCst);
        let accesses = hit_count + miss_count;
        CacheStats {
            total_items,
            hit_count,
            miss_count,
            hit_rate: if accesses == 0 { 0.0 } else { hit_count as f64 / accesses as f64 },
            memory_usage: self.stats.memory_bytes.load(Ordering::SeqCst),
        }
    }

    /// Liveness only: true as long as the store is reachable.
    pub fn health_check(&self) -> bool {
        let _entries = self.entries.read();
        true
    }

    /// Reclaims entries that expired without ever being re-read. Returns the
    /// number of entries removed.
    pub fn sweep_expired(&self) -> usize {
        let now = current_time_millis();
        let mut entries = self.entries.write();
        let before = entries.len();
        let mut freed: u64 = 0;
        entries.retain(|key, entry| {
            if entry.is_expired(now) {
                freed += key.len() as u64 + entry.value.len() as u64;
                false
            } else {
                true
            }
        });
        if freed > 0 {
            self.stats.memory_bytes.fetch_sub(freed, Ordering::SeqCst);
        }
        before - entries.len()
    }

    fn entry_cost(key: &str, entry: &CacheEntry) -> u64 {
        key.len() as u64 + entry.value.len() as u64
    }
}
