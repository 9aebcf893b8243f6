use std::sync::atomic::AtomicU64;

#[derive(Debug, Default)]
pub struct CacheStatsAtomics {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub memory_bytes: AtomicU64,
}
