//! Payload codec trait definitions.

/// Encoding seam between boundary values and stored bytes.
pub mod payload_codec;
