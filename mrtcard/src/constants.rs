// mrtcard/src/constants.rs
//! Protocol and card-layout constants shared across the crate

/// FeliCa Polling command code
pub const FELICA_CMD_POLLING: u8 = 0x00;

/// FeliCa Polling response code
pub const FELICA_RESP_POLLING: u8 = 0x01;

/// FeliCa ReadWithoutEncryption command code
pub const FELICA_CMD_READ_WITHOUT_ENCRYPTION: u8 = 0x06;

/// Block list element header: 2-byte element, direct access, service index 0
pub const BLOCK_LIST_ELEMENT_HEADER: u8 = 0x80;

/// Size of one card memory block in bytes
pub const BLOCK_SIZE: usize = 16;

/// Bytes preceding the first block in a read response:
/// length(1) + response code(1) + IDm(8) + status1(1) + status2(1) + block count(1)
pub const READ_RESPONSE_HEADER_LEN: usize = 13;

/// Offsets of the status flags and block count in a read response
pub const STATUS_FLAG1_OFFSET: usize = 10;
/// Offset of status flag 2
pub const STATUS_FLAG2_OFFSET: usize = 11;
/// Offset of the block count
pub const BLOCK_COUNT_OFFSET: usize = 12;

/// Fixed bytes of a read command frame before the block list:
/// length(1) + command(1) + IDm(8) + service count(1) + service code(2) + block count(1)
pub const READ_COMMAND_HEADER_LEN: usize = 14;

/// Largest frame the one-byte length field can describe
pub const MAX_FRAME_LEN: usize = 255;

/// Header signature (rendered as spaced uppercase hex) of a fare block
pub const FARE_HEADER_SIGNATURE: &str = "08 52 10 00";

/// Default number of history blocks requested per read
pub const DEFAULT_BLOCK_COUNT: u8 = 10;

/// Default number of attempts per read session
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
