//! Local TTL cache module.
//!
//! This module provides the per-node key/value store used by the cache
//! engine. Every edge node owns one [`structs::local_cache::LocalCache`];
//! there is no replication between nodes.
//!
//! # Features
//!
//! - Wall-clock TTL per entry with lazy eviction on access
//! - Transparent LZ4 compression for payloads above a configurable threshold
//! - Atomic hit/miss counters and approximate memory accounting
//! - Optional expired-entry sweep for entries that are never re-read
//! - Pluggable payload codec, JSON by default
//!
//! # Architecture
//!
//! The store is a `BTreeMap` behind a `parking_lot::RwLock`; per-key
//! operations never hold the lock across I/O. Payloads cross the boundary
//! as `serde_json::Value`, are encoded to bytes by a
//! [`traits::payload_codec::PayloadCodec`], and compression operates on the
//! encoded bytes, not on the language-native value.

/// Error types for cache operations.
pub mod errors;

/// Implementation blocks for the local cache and codecs.
pub mod impls;

/// Data structures for entries, statistics, and the cache itself.
pub mod structs;

/// Payload codec trait definitions.
pub mod traits;
