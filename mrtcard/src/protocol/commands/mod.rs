// mrtcard/src/protocol/commands/mod.rs

/// Polling command encoding.
pub mod polling;
/// ReadWithoutEncryption command encoding.
pub mod read;

pub use polling::{build_polling_command, encode_polling};
pub use read::{ReadCommandConfig, build_read_command, encode_read};

use crate::Result;
use crate::constants::{FELICA_CMD_POLLING, FELICA_CMD_READ_WITHOUT_ENCRYPTION};
use crate::types::{Idm, ServiceCode, SystemCode};

/// Outbound commands sent to the card. Every frame starts with a length
/// byte that counts itself.
#[derive(Debug, Clone)]
pub enum Command {
    /// Detect a card and obtain its IDm.
    Polling {
        /// System to poll, `SystemCode::ANY` for any.
        system_code: SystemCode,
        /// Extra data requested in the response, 0 for none.
        request_code: u8,
        /// Number of response slots minus one.
        time_slot: u8,
    },
    /// Read blocks `0..block_count` of one service.
    ReadWithoutEncryption {
        /// Card addressed by the read.
        idm: Idm,
        /// Service holding the blocks.
        service: ServiceCode,
        /// Number of blocks, starting at block 0.
        block_count: u8,
    },
}

impl Command {
    /// Return the command code FeliCa command code.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::Polling { .. } => FELICA_CMD_POLLING,
            Self::ReadWithoutEncryption { .. } => FELICA_CMD_READ_WITHOUT_ENCRYPTION,
        }
    }

    /// Encode the command into a length-prefixed frame.
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Self::Polling {
                system_code,
                request_code,
                time_slot,
            } => Ok(encode_polling(*system_code, *request_code, *time_slot)),
            Self::ReadWithoutEncryption {
                idm,
                service,
                block_count,
            } => encode_read(*idm, *service, *block_count),
        }
    }
}
