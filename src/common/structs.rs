//! Shared data structures.

/// Generic error with a message, used during startup.
pub mod custom_error;
