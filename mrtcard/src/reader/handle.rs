// mrtcard/src/reader/handle.rs

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use log::{debug, error, info, warn};
use tokio_util::sync::CancellationToken;

use super::config::ReaderConfig;
use super::session::{ReadReport, ReadSession, SessionState};
use crate::card::Transaction;
use crate::error::TransportErrorKind;
use crate::protocol::{build_polling_command, decode_polling, encode_read, parse_response};
use crate::transport::{TagEvent, TagTransport};
use crate::types::TagId;
use crate::utils::backoff_delay;
use crate::{Error, Result};

/// Result of one completed `read()`.
#[derive(Debug)]
pub enum ReadOutcome {
    /// Card read and decoded.
    Success {
        /// Newest first.
        transactions: Vec<Transaction>,
        /// What the session did.
        report: ReadReport,
    },
    /// All attempts failed.
    Failure {
        /// `MaxRetriesExceeded` wrapping the last attempt's error.
        error: Error,
        /// What the session did.
        report: ReadReport,
    },
}

impl ReadOutcome {
    /// True for [`ReadOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Decoded history, newest first, on success.
    pub fn transactions(&self) -> Option<&[Transaction]> {
        match self {
            Self::Success { transactions, .. } => Some(transactions),
            Self::Failure { .. } => None,
        }
    }

    /// Terminal error on failure.
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error),
        }
    }

    /// Attempts and delays of the session.
    pub fn report(&self) -> &ReadReport {
        match self {
            Self::Success { report, .. } | Self::Failure { report, .. } => report,
        }
    }

    /// Human-readable failure text, `None` on success.
    pub fn message(&self) -> Option<String> {
        self.error().map(Error::user_message)
    }
}

/// Exclusive use of the transport for one session. Releasing the
/// subscription happens on drop so that every exit path, including a
/// dropped `read()` future, unsubscribes.
struct Subscription<'a, T: TagTransport> {
    transport: tokio::sync::MutexGuard<'a, T>,
}

impl<T: TagTransport> Deref for Subscription<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.transport
    }
}

impl<T: TagTransport> DerefMut for Subscription<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}

impl<T: TagTransport> Drop for Subscription<'_, T> {
    fn drop(&mut self) {
        self.transport.release();
    }
}

fn lock_token(slot: &Mutex<Option<CancellationToken>>) -> MutexGuard<'_, Option<CancellationToken>> {
    slot.lock().unwrap_or_else(|e| e.into_inner())
}

/// Reads the transaction history from a card through an injected transport.
///
/// One session at a time: a `read()` issued while another is in flight
/// returns `None` immediately.
pub struct NfcReader<T: TagTransport> {
    transport: tokio::sync::Mutex<T>,
    config: ReaderConfig,
    cancel: Mutex<Option<CancellationToken>>,
}

impl<T: TagTransport> NfcReader<T> {
    /// Create a reader with the default configuration.
    pub fn new(transport: T) -> Self {
        Self {
            transport: tokio::sync::Mutex::new(transport),
            config: ReaderConfig::default(),
            cancel: Mutex::new(None),
        }
    }

    /// Create a reader with a validated configuration.
    pub fn with_config(transport: T, config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            transport: tokio::sync::Mutex::new(transport),
            config,
            cancel: Mutex::new(None),
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Whether a session is currently in flight.
    pub fn is_reading(&self) -> bool {
        self.transport.try_lock().is_err()
    }

    /// Run one read session.
    ///
    /// Returns `None` when another session is already running (nothing is
    /// started) or when this session was cancelled with [`stop`](Self::stop).
    pub async fn read(&self) -> Option<ReadOutcome> {
        // The token is installed while `stop` is locked out, so a session
        // observed through `is_reading` can always be cancelled.
        let (guard, token) = {
            let mut slot = lock_token(&self.cancel);
            let guard = match self.transport.try_lock() {
                Ok(guard) => guard,
                Err(_) => {
                    debug!("read already in progress, ignoring");
                    return None;
                }
            };
            let token = CancellationToken::new();
            *slot = Some(token.clone());
            (guard, token)
        };

        let mut subscription = Subscription { transport: guard };
        let mut session = ReadSession::new(&self.config);

        let outcome = tokio::select! {
            _ = token.cancelled() => {
                info!("read cancelled");
                None
            }
            outcome = self.run(&mut subscription, &mut session) => Some(outcome),
        };

        lock_token(&self.cancel).take();
        drop(subscription);
        outcome
    }

    /// Cancel the session in flight, if any. The transport subscription is
    /// released and no outcome is delivered for that session.
    pub fn stop(&self) {
        if let Some(token) = lock_token(&self.cancel).take() {
            token.cancel();
        }
    }

    /// Alias of [`stop`](Self::stop).
    pub fn cleanup(&self) {
        self.stop();
    }

    /// Consume the reader and return the transport.
    pub fn into_inner(self) -> T {
        self.transport.into_inner()
    }

    async fn run(&self, transport: &mut T, session: &mut ReadSession) -> ReadOutcome {
        info!(
            "starting card read (up to {} attempts)",
            session.max_attempts()
        );

        loop {
            let attempt = session.begin_attempt();
            debug!("read attempt {} of {}", attempt, session.max_attempts());

            match self.attempt(transport, session).await {
                Ok(transactions) => {
                    session.enter(SessionState::Succeeded);
                    info!(
                        "read {} transactions on attempt {}",
                        transactions.len(),
                        attempt
                    );
                    return ReadOutcome::Success {
                        transactions,
                        report: session.report(),
                    };
                }
                Err(e) if session.has_attempts_left() => {
                    let delay = backoff_delay(attempt);
                    debug!(
                        "attempt {} failed: {}; retrying in {}ms",
                        attempt,
                        e,
                        delay.as_millis()
                    );
                    session.record_delay(delay);
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    session.enter(SessionState::Failed);
                    error!("error reading card after {} attempts: {}", attempt, e);
                    return ReadOutcome::Failure {
                        error: Error::MaxRetriesExceeded {
                            attempts: attempt,
                            last: Box::new(e),
                        },
                        report: session.report(),
                    };
                }
            }
        }
    }

    async fn attempt(&self, transport: &mut T, session: &mut ReadSession) -> Result<Vec<Transaction>> {
        let timeout = session.timeout();

        if !session.is_subscribed() {
            transport.scan().await?;
            session.set_subscribed();
        }

        let tag = wait_for_tag(transport, timeout).await?;

        session.enter(SessionState::Polling);
        let resp = exchange(transport, &tag, &build_polling_command(), timeout).await?;
        let idm = decode_polling(&resp)?;
        session.set_card(idm);

        session.enter(SessionState::ReadingBlocks);
        let frame = encode_read(idm, session.service_code(), session.block_count())?;
        let resp = exchange(transport, &tag, &frame, timeout).await?;
        parse_response(&resp)
    }
}

async fn wait_for_tag<T: TagTransport>(transport: &mut T, timeout: Duration) -> Result<TagId> {
    match tokio::time::timeout(timeout, transport.next_event()).await {
        Err(_) => Err(Error::TimeoutWaitingForTag),
        Ok(Ok(TagEvent::Present(tag))) => {
            debug!("tag {} present", tag);
            Ok(tag)
        }
        Ok(Ok(TagEvent::ReadError(message))) => {
            warn!("tag read error: {}", message);
            Err(Error::transport(TransportErrorKind::ReadError, message))
        }
        Ok(Err(e)) => Err(e),
    }
}

async fn exchange<T: TagTransport>(
    transport: &mut T,
    tag: &TagId,
    frame: &[u8],
    timeout: Duration,
) -> Result<Vec<u8>> {
    tokio::time::timeout(timeout, transport.transceive(tag, frame))
        .await
        .map_err(|_| Error::Timeout)?
}
