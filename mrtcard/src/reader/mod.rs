// mrtcard/src/reader/mod.rs

//! Read session controller: drives polling and block reads over a
//! [`TagTransport`](crate::transport::TagTransport) with bounded retries.

/// Session configuration.
pub mod config;
mod handle;
/// Per-read session state.
pub mod session;

pub use config::{ReaderConfig, ReaderConfigBuilder};
pub use handle::{NfcReader, ReadOutcome};
pub use session::{ReadReport, ReadSession, SessionState};
