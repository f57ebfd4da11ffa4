// mrtcard/src/transport/mock.rs

//! Scriptable in-memory transport for tests.
//!
//! [`MockTransport`] is handed to the reader; the paired
//! [`MockTransportHandle`] stays with the test to present tags, queue
//! command responses or failures, and inspect what was sent.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::TransportErrorKind;
use crate::transport::traits::{TagEvent, TagTransport};
use crate::types::TagId;
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockState {
    sent: Vec<(TagId, Vec<u8>)>,
    responses: VecDeque<Result<Vec<u8>>>,
    scan_failures: VecDeque<Error>,
    scans: usize,
    releases: usize,
    subscribed: bool,
}

fn lock(state: &Mutex<MockState>) -> MutexGuard<'_, MockState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

/// Mock transport. Command responses are consumed in FIFO order; when none
/// is queued, `transceive` never completes (the tag stays silent), and
/// `next_event` waits until the handle sends an event.
#[derive(Debug)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
    events: mpsc::UnboundedReceiver<TagEvent>,
}

impl MockTransport {
    /// Create a transport and the handle that scripts it.
    pub fn new() -> (Self, MockTransportHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let state = Arc::new(Mutex::new(MockState::default()));
        let transport = Self {
            state: state.clone(),
            events: rx,
        };
        let handle = MockTransportHandle { state, events: tx };
        (transport, handle)
    }
}

#[async_trait]
impl TagTransport for MockTransport {
    async fn scan(&mut self) -> Result<()> {
        let mut state = lock(&self.state);
        state.scans += 1;
        if let Some(err) = state.scan_failures.pop_front() {
            return Err(err);
        }
        state.subscribed = true;
        Ok(())
    }

    async fn next_event(&mut self) -> Result<TagEvent> {
        if !lock(&self.state).subscribed {
            return Err(Error::transport(
                TransportErrorKind::Disconnected,
                "not scanning",
            ));
        }
        self.events.recv().await.ok_or_else(|| {
            Error::transport(TransportErrorKind::Disconnected, "event channel closed")
        })
    }

    async fn transceive(&mut self, tag: &TagId, frame: &[u8]) -> Result<Vec<u8>> {
        let next = {
            let mut state = lock(&self.state);
            state.sent.push((tag.clone(), frame.to_vec()));
            state.responses.pop_front()
        };
        match next {
            Some(resp) => resp,
            None => std::future::pending().await,
        }
    }

    fn release(&mut self) {
        let mut state = lock(&self.state);
        state.releases += 1;
        state.subscribed = false;
    }
}

/// Test-side controller for a [`MockTransport`].
#[derive(Debug, Clone)]
pub struct MockTransportHandle {
    state: Arc<Mutex<MockState>>,
    events: mpsc::UnboundedSender<TagEvent>,
}

impl MockTransportHandle {
    /// Present a tag to the reader.
    pub fn present(&self, tag: TagId) {
        // The receiver lives as long as the transport; a send error only
        // means the reader was dropped.
        let _ = self.events.send(TagEvent::Present(tag));
    }

    /// Emit a tag read error event.
    pub fn read_error(&self, message: impl Into<String>) {
        let _ = self.events.send(TagEvent::ReadError(message.into()));
    }

    /// Queue the response to the next command frame.
    pub fn push_response(&self, resp: Vec<u8>) {
        lock(&self.state).responses.push_back(Ok(resp));
    }

    /// Make the next command exchange fail with `err`.
    pub fn push_failure(&self, err: Error) {
        lock(&self.state).responses.push_back(Err(err));
    }

    /// Make the next `scan` call fail with `err`.
    pub fn fail_next_scan(&self, err: Error) {
        lock(&self.state).scan_failures.push_back(err);
    }

    /// Frames sent so far, in order.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        lock(&self.state)
            .sent
            .iter()
            .map(|(_, f)| f.clone())
            .collect()
    }

    /// Tags the frames were addressed to, in order.
    pub fn sent_to(&self) -> Vec<TagId> {
        lock(&self.state).sent.iter().map(|(t, _)| t.clone()).collect()
    }

    /// Number of `scan` calls.
    pub fn scans(&self) -> usize {
        lock(&self.state).scans
    }

    /// Number of `release` calls.
    pub fn releases(&self) -> usize {
        lock(&self.state).releases
    }

    /// Whether a scan is active.
    pub fn is_subscribed(&self) -> bool {
        lock(&self.state).subscribed
    }

    /// Responses still queued.
    pub fn pending_responses(&self) -> usize {
        lock(&self.state).responses.len()
    }
}
