//! Implementation blocks for the local cache and codecs.

/// JSON codec implementation.
pub mod json_codec;

/// Core cache operations.
pub mod local_cache;
