// mrtcard/src/reader/config.rs

//! Read session configuration.

use std::time::Duration;

use crate::constants::{
    DEFAULT_BLOCK_COUNT, DEFAULT_RETRY_ATTEMPTS, MAX_FRAME_LEN, READ_COMMAND_HEADER_LEN,
};
use crate::types::ServiceCode;
use crate::utils::default_read_timeout;
use crate::{Error, Result};

/// Largest block count whose read frame still fits the one-byte length.
pub const MAX_BLOCK_COUNT: u8 = ((MAX_FRAME_LEN - READ_COMMAND_HEADER_LEN) / 2) as u8;

/// Tunables for [`NfcReader`](super::NfcReader) sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Total attempts per `read()`, including the first.
    pub retry_attempts: u32,
    /// Per-attempt window for the tag to appear and for each response.
    pub read_timeout: Duration,
    /// Service read from the card.
    pub service_code: ServiceCode,
    /// History blocks requested per read.
    pub block_count: u8,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            read_timeout: default_read_timeout(),
            service_code: ServiceCode::HISTORY,
            block_count: DEFAULT_BLOCK_COUNT,
        }
    }
}

impl ReaderConfig {
    /// Start a builder from the defaults.
    pub fn builder() -> ReaderConfigBuilder {
        ReaderConfigBuilder::new()
    }

    /// Reject configurations a session cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.retry_attempts == 0 {
            return Err(Error::InvalidArgument(
                "retry_attempts must be at least 1".into(),
            ));
        }
        if self.block_count == 0 || self.block_count > MAX_BLOCK_COUNT {
            return Err(Error::InvalidArgument(format!(
                "block_count must be within 1..={}, got {}",
                MAX_BLOCK_COUNT, self.block_count
            )));
        }
        Ok(())
    }
}

/// Helper to construct a validated [`ReaderConfig`].
#[derive(Debug, Clone, Default)]
pub struct ReaderConfigBuilder {
    config: ReaderConfig,
}

impl ReaderConfigBuilder {
    /// Same as `ReaderConfig::builder()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total attempts per read, at least 1.
    pub fn retry_attempts(mut self, attempts: u32) -> Self {
        self.config.retry_attempts = attempts;
        self
    }

    /// Per-attempt timeout.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.config.read_timeout = timeout;
        self
    }

    /// Service code to read.
    pub fn service_code(mut self, code: ServiceCode) -> Self {
        self.config.service_code = code;
        self
    }

    /// Blocks per read, `1..=MAX_BLOCK_COUNT`.
    pub fn block_count(mut self, count: u8) -> Self {
        self.config.block_count = count;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<ReaderConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
