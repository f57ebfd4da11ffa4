// Aggregator for protocol integration tests located in `tests/protocol/`.
// Cargo treats each top-level file in `tests/` as an integration test crate;
// we include the per-topic files as submodules to keep the directory layout
// neat while still allowing `cargo test` to discover them.

mod common;

#[path = "protocol/command_encode_test.rs"]
mod command_encode_test;

#[path = "protocol/response_decode_test.rs"]
mod response_decode_test;

#[path = "protocol/block_decode_test.rs"]
mod block_decode_test;
