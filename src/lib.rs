//! # Edgecache
//!
//! An adaptive geo-distributed edge caching engine built with Rust and Tokio.
//!
//! ## Overview
//!
//! Edgecache maintains a registry of geographic regions and the edge nodes
//! within them, routes cache reads and writes to the edge node closest to the
//! requesting client while respecting node capacity and health, and keeps a
//! local, TTL-bound, compression-aware key/value store with hit/miss
//! accounting on every node.
//!
//! ## Features
//!
//! - **Local TTL Cache**: per-entry expiration with lazy eviction, transparent
//!   LZ4 compression for large payloads, and running hit/miss statistics
//! - **Geo Routing**: great-circle distance region selection with weighted
//!   latency/load node scoring and deterministic tie-breaking
//! - **Health Monitoring**: background TCP probes with per-probe timeouts,
//!   consecutive-failure tracking, and automatic node recovery
//! - **Statistics**: per-node cache snapshots aggregated into regional
//!   distribution and hit-rate reporting
//! - **Soft Failures**: routing and storage errors degrade to cache misses,
//!   never to process faults
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use edgecache::config::structs::configuration::Configuration;
//! use edgecache::engine::structs::geo_cache_engine::GeoCacheEngine;
//!
//! let config = Arc::new(Configuration::init());
//! let engine = GeoCacheEngine::new(config);
//! engine.cache_with_geographic_distribution("listing:42", &data, Some(coord), None);
//! ```
//!
//! ## Modules
//!
//! - [`cache`] - Local TTL key/value store with compression and statistics
//! - [`common`] - Shared utilities, logging setup, and error handling
//! - [`config`] - Configuration management and TOML parsing
//! - [`engine`] - Cache orchestrator combining routing and local caching
//! - [`geo`] - Region/edge-node registry and geographic router
//! - [`health`] - Background health monitor for edge nodes

/// Local TTL cache module.
///
/// Implements the per-node key/value store with wall-clock expiration,
/// transparent LZ4 compression above a configurable threshold, and atomic
/// hit/miss counters.
pub mod cache;

/// Common utilities and shared functionality.
///
/// Contains the logging setup, timestamp helpers, and the generic error
/// type used during startup.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files,
/// including the static region/edge-node topology.
pub mod config;

/// Cache orchestrator module.
///
/// Combines the geographic router with each node's local cache to implement
/// geographically distributed writes and reads, and aggregates statistics
/// across all nodes and regions.
pub mod engine;

/// Geographic topology and routing module.
///
/// Holds the region/edge-node registry and the router that selects the best
/// node for a client coordinate.
pub mod geo;

/// Health monitoring module.
///
/// Periodically probes every edge node off the request path and updates
/// status, latency, and load in the registry.
pub mod health;

/// CLI argument parsing and common data structures.
pub mod structs;
