// mrtcard/src/reader/session.rs

use std::time::Duration;

use log::trace;

use super::config::ReaderConfig;
use crate::types::{Idm, ServiceCode};

/// Where a read session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, no attempt started.
    Idle,
    /// Subscribed, waiting for a tag.
    WaitingForTag,
    /// Polling exchange in flight.
    Polling,
    /// Block read exchange in flight.
    ReadingBlocks,
    /// History decoded.
    Succeeded,
    /// Attempts exhausted.
    Failed,
}

/// State owned by a single `read()` call. Nothing here outlives it.
#[derive(Debug)]
pub struct ReadSession {
    attempt: u32,
    max_attempts: u32,
    timeout: Duration,
    service_code: ServiceCode,
    block_count: u8,
    state: SessionState,
    subscribed: bool,
    delays: Vec<Duration>,
    card: Option<Idm>,
}

impl ReadSession {
    /// Fresh session for one `read()`.
    pub fn new(config: &ReaderConfig) -> Self {
        Self {
            attempt: 0,
            max_attempts: config.retry_attempts,
            timeout: config.read_timeout,
            service_code: config.service_code,
            block_count: config.block_count,
            state: SessionState::Idle,
            subscribed: false,
            delays: Vec::new(),
            card: None,
        }
    }

    /// Current 1-based attempt, 0 before the first.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Attempt limit.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Per-attempt timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Service to read.
    pub fn service_code(&self) -> ServiceCode {
        self.service_code
    }

    /// Blocks to request.
    pub fn block_count(&self) -> u8 {
        self.block_count
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether another attempt may start.
    pub fn has_attempts_left(&self) -> bool {
        self.attempt < self.max_attempts
    }

    pub(crate) fn enter(&mut self, next: SessionState) {
        trace!(
            "session attempt {}: {:?} -> {:?}",
            self.attempt, self.state, next
        );
        self.state = next;
    }

    /// Start the next attempt and return its 1-based number.
    pub(crate) fn begin_attempt(&mut self) -> u32 {
        self.attempt += 1;
        self.enter(SessionState::WaitingForTag);
        self.attempt
    }

    pub(crate) fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    pub(crate) fn set_subscribed(&mut self) {
        self.subscribed = true;
    }

    pub(crate) fn record_delay(&mut self, delay: Duration) {
        self.delays.push(delay);
    }

    pub(crate) fn set_card(&mut self, idm: Idm) {
        self.card = Some(idm);
    }

    /// Snapshot of what the session has done so far.
    pub fn report(&self) -> ReadReport {
        ReadReport {
            attempts: self.attempt,
            delays: self.delays.clone(),
            card: self.card,
        }
    }
}

/// What a finished session did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadReport {
    /// Attempts started.
    pub attempts: u32,
    /// Backoff waits taken between attempts, in order.
    pub delays: Vec<Duration>,
    /// IDm of the last card that answered polling.
    pub card: Option<Idm>,
}
