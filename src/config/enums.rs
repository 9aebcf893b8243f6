//! Configuration error enumeration.

/// Errors raised while reading or parsing the configuration file.
pub mod configuration_error;
