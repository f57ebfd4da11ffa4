// mrtcard/src/transport/traits.rs

use async_trait::async_trait;

use crate::Result;
use crate::types::TagId;

/// Events delivered while the transport is scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEvent {
    /// A tag entered the field.
    Present(TagId),
    /// The host saw a tag but could not read it.
    ReadError(String),
}

/// TagTransport abstracts the host NFC stack away from the read session.
///
/// The session drives it as: `scan` once, then per attempt `next_event`
/// followed by one or more `transceive` calls, and finally `release` on
/// every exit path. Timeouts are applied by the caller; implementations may
/// simply wait.
#[async_trait]
pub trait TagTransport: Send {
    /// Start scanning and subscribe to tag events.
    async fn scan(&mut self) -> Result<()>;

    /// Wait for the next tag event.
    async fn next_event(&mut self) -> Result<TagEvent>;

    /// Send a raw command frame to `tag` and return the raw response frame.
    async fn transceive(&mut self, tag: &TagId, frame: &[u8]) -> Result<Vec<u8>>;

    /// Drop the event subscription and abort any exchange in flight.
    /// Must be safe to call more than once, or without a prior `scan`.
    fn release(&mut self);
}
