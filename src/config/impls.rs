//! Implementation blocks for configuration loading and validation.

/// Default construction, file loading, and validation.
pub mod configuration;

/// Display and Error implementations for ConfigurationError.
pub mod configuration_error;
