//! Timeout and backoff helpers for read sessions.

use std::time::Duration;

/// Default per-attempt window, in milliseconds, for waiting on a tag and on
/// each command response.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 5000;

/// Backoff unit: attempt `n` waits `n` times this before the next attempt.
pub const BACKOFF_BASE_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default read timeout as Duration.
pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_READ_TIMEOUT_MS)
}

/// Linear backoff delay after failed attempt number `attempt` (1-based).
pub fn backoff_delay(attempt: u32) -> Duration {
    ms(BACKOFF_BASE_MS.saturating_mul(u64::from(attempt)))
}
