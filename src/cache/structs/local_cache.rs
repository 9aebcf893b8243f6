use std::collections::BTreeMap;
use parking_lot::RwLock;
use crate::cache::structs::cache_entry::CacheEntry;
use crate::cache::structs::cache_stats_atomics::CacheStatsAtomics;
use crate::cache::traits::payload_codec::PayloadCodec;

pub struct LocalCache {
    pub entries: RwLock<BTreeMap<String, CacheEntry>>,
    pub stats: CacheStatsAtomics,
    pub codec: Box<dyn PayloadCodec>,
    pub compression_threshold: usize,
    pub default_ttl: u64,
    pub reset_counters_on_clear: bool,
}
