// mrtcard/src/protocol/mod.rs

//! Wire-level encoding: outbound command frames, inbound response parsing
//! and the bounds-checked field readers both rely on.

/// Outbound command frames.
pub mod commands;
/// Bounds-checked field readers.
pub mod parser;
/// Inbound response decoding.
pub mod responses;

pub use commands::{
    Command, ReadCommandConfig, build_polling_command, build_read_command, encode_polling,
    encode_read,
};
pub use responses::{decode_polling, parse_blocks, parse_response, validate_response};
