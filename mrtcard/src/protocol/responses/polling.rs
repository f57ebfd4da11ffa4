// mrtcard/src/protocol/responses/polling.rs

use crate::constants::FELICA_RESP_POLLING;
use crate::protocol::parser;
use crate::types::Idm;
use crate::Result;

/// Decode a Polling response and return the card IDm.
///
/// Layout: length(1) + response code(1 = 0x01) + IDm(8) + PMm(8)
/// [+ system code(2) when requested].
pub fn decode_polling(data: &[u8]) -> Result<Idm> {
    const MIN_LEN: usize = 1 + 1 + 8 + 8; // 18
    parser::ensure_len(data, MIN_LEN)?;
    parser::expect_response_code(data, 1, FELICA_RESP_POLLING)?;
    parser::idm_at(data, 2)
}
