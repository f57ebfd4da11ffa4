//! Utilities for mrtcard: small, reusable helpers used across the crate.
//!
//! Hex rendering is shared by the block codec (header signature matching)
//! and by log output; timeout helpers centralize the read-session defaults.

/// Hex rendering and parsing.
pub mod hex;
/// Timeout and backoff helpers.
pub mod timeout;

pub use hex::*;
pub use timeout::*;
