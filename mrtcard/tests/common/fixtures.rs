// fixtures.rs: commonly used test payloads and frames

use mrtcard::test_support;
use mrtcard::types::{Idm, ServiceCode};

pub use mrtcard::test_support::{
    fare_block, polling_response, read_response, read_response_with_status, recharge_block,
};

pub fn sample_idm() -> Idm {
    test_support::sample_idm()
}

pub fn zero_idm() -> Idm {
    Idm::from_bytes([0u8; 8])
}

pub fn history_service() -> ServiceCode {
    ServiceCode::new(0x220f)
}

/// Scenario block captured from a fare tap: Agargaon to Motijheel, 100
/// minutes after the epoch, 10000 left on the card.
pub const FARE_TAP_HEX: &str = "08 52 10 00 64 00 00 00 32 00 0A 10 27 00 00 00";

/// Three-entry history, newest first: a fare after a recharge after a fare.
pub fn short_history() -> Vec<[u8; 16]> {
    vec![
        fare_block(50, 10, 440, 2_000),
        recharge_block(50, 500, 1_900),
        fare_block(95, 50, 0, 1_000),
    ]
}
