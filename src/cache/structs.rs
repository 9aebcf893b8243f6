//! Cache data structures.

/// A single stored entry with expiration and hit accounting.
pub mod cache_entry;

/// Serializable statistics snapshot.
pub mod cache_stats;

/// Atomic counters for thread-safe statistics updates.
pub mod cache_stats_atomics;

/// JSON payload codec.
pub mod json_codec;

/// The per-node TTL cache.
pub mod local_cache;
