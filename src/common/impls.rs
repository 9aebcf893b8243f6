//! Implementation blocks for common structures.

/// Constructor and Display implementation for CustomError.
pub mod custom_error;
