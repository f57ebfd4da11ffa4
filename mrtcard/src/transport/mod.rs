// mrtcard/src/transport/mod.rs

/// Scriptable in-memory transport.
pub mod mock;
/// Transport seam.
pub mod traits;

pub use mock::{MockTransport, MockTransportHandle};
pub use traits::{TagEvent, TagTransport};
