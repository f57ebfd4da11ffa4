// mrtcard/src/protocol/responses/mod.rs

/// Polling response.
pub mod polling;
/// ReadWithoutEncryption response.
pub mod read;

pub use polling::decode_polling;
pub use read::{parse_blocks, parse_response, validate_response};
