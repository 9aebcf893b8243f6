//! Configuration management module.
//!
//! Handles loading, parsing, and validating configuration from TOML files.
//! The configuration carries the static region/edge-node topology, the cache
//! tuning knobs (TTL, compression threshold), the routing score weights, and
//! the health monitor schedule.
//!
//! # Usage
//!
//! ```rust,ignore
//! use edgecache::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file(false)?;
//! ```

/// Configuration error enumeration.
pub mod enums;

/// Implementation blocks for configuration loading and validation.
pub mod impls;

/// Configuration data structures.
pub mod structs;
