// mrtcard/src/protocol/commands/polling.rs

use crate::constants::FELICA_CMD_POLLING;
use crate::types::SystemCode;

/// Encode a Polling frame: length(1) + command code(1) + system code(2, LE)
/// + request code(1) + time slot(1).
pub fn encode_polling(system_code: SystemCode, request_code: u8, time_slot: u8) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + 1 + 2 + 1 + 1);
    buf.push(0); // length, patched below
    buf.push(FELICA_CMD_POLLING);
    buf.extend_from_slice(&system_code.to_le_bytes());
    buf.push(request_code);
    buf.push(time_slot);
    buf[0] = buf.len() as u8;
    buf
}

/// The fixed polling frame sent at the start of every read attempt:
/// wildcard system code, no additional request data, a single time slot.
pub fn build_polling_command() -> Vec<u8> {
    encode_polling(SystemCode::ANY, 0x00, 0x00)
}
