// mrtcard/src/protocol/commands/read.rs

use crate::constants::{
    BLOCK_LIST_ELEMENT_HEADER, FELICA_CMD_READ_WITHOUT_ENCRYPTION, MAX_FRAME_LEN,
    READ_COMMAND_HEADER_LEN,
};
use crate::types::{Idm, ServiceCode};
use crate::{Error, Result};

/// Inputs for a ReadWithoutEncryption frame.
#[derive(Debug, Clone, Copy)]
pub struct ReadCommandConfig<'a> {
    /// Card identifier from polling; must be exactly 8 bytes.
    pub idm: &'a [u8],
    /// Service holding the history blocks.
    pub service_code: ServiceCode,
    /// Blocks 0..block_count are requested.
    pub block_count: u8,
}

/// Build a ReadWithoutEncryption frame (FeliCa command code 0x06)
///
/// Layout: length(1) + 0x06 + IDm(8) + service count(1 = 0x01)
/// + service code(2, LE) + block count(1) + block list(2 per block).
/// Each block list element is `0x80, index`.
pub fn build_read_command(config: &ReadCommandConfig<'_>) -> Result<Vec<u8>> {
    let idm = Idm::try_from(config.idm).map_err(|_| {
        Error::InvalidArgument(format!(
            "idm must be 8 bytes, got {}",
            config.idm.len()
        ))
    })?;
    encode_read(idm, config.service_code, config.block_count)
}

/// Encode a ReadWithoutEncryption frame for an already validated IDm.
pub fn encode_read(idm: Idm, service: ServiceCode, block_count: u8) -> Result<Vec<u8>> {
    let total = READ_COMMAND_HEADER_LEN + 2 * usize::from(block_count);
    if total > MAX_FRAME_LEN {
        return Err(Error::InvalidArgument(format!(
            "read frame of {} bytes exceeds {} ({} blocks)",
            total, MAX_FRAME_LEN, block_count
        )));
    }

    let mut buf = Vec::with_capacity(total);
    buf.push(total as u8);
    buf.push(FELICA_CMD_READ_WITHOUT_ENCRYPTION);
    buf.extend_from_slice(idm.as_bytes());
    buf.push(0x01); // one service
    buf.extend_from_slice(&service.to_le_bytes());
    buf.push(block_count);

    for index in 0..block_count {
        buf.push(BLOCK_LIST_ELEMENT_HEADER);
        buf.push(index);
    }

    Ok(buf)
}
