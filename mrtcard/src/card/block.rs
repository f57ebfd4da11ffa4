// mrtcard/src/card/block.rs

//! Transaction block codec.
//!
//! Block layout (16 bytes, multi-byte integers little-endian):
//!
//! | offset | len | field                                   |
//! |--------|-----|-----------------------------------------|
//! | 0      | 4   | fixed header (type signature)           |
//! | 4      | 2   | minutes since 2024-01-01T00:00:00Z      |
//! | 6      | 2   | transaction type (reserved)             |
//! | 8      | 1   | from station code                       |
//! | 9      | 1   | reserved                                |
//! | 10     | 1   | to station code                         |
//! | 11     | 3   | balance after the transaction           |
//! | 14     | 2   | trailing bytes                          |

use uuid::Uuid;

use super::transaction::{Transaction, TransactionType};
use super::{station, timestamp};
use crate::constants::{BLOCK_SIZE, FARE_HEADER_SIGNATURE};
use crate::types::BlockData;
use crate::utils::to_hex_string;
use crate::Result;

/// Largest balance the 3-byte field can hold.
pub const MAX_BALANCE: u32 = 0x00ff_ffff;

/// Fixed-layout view of one history block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBlock {
    /// Bytes 0..4; selects the transaction type.
    pub fixed_header: [u8; 4],
    /// Minutes since the card epoch.
    pub timestamp_raw: u16,
    /// Bytes 6..8, not interpreted.
    pub transaction_type_raw: [u8; 2],
    /// Origin station code (byte 8).
    pub from_station_code: u8,
    /// Byte 9. Carried through unchanged, never interpreted.
    pub reserved: u8,
    /// Destination station code (byte 10).
    pub to_station_code: u8,
    /// Balance after the transaction (LE24 at byte 11).
    pub balance: u32,
    /// Bytes 14..16, not interpreted.
    pub trailing: [u8; 2],
}

impl RawBlock {
    /// Split a 16-byte block into its fields.
    pub fn parse(block: &[u8]) -> Result<Self> {
        let data = BlockData::try_from(block)?;
        Ok(Self::from_block_data(&data))
    }

    /// Split an already size-checked block.
    pub fn from_block_data(data: &BlockData) -> Self {
        let b = data.as_bytes();
        Self {
            fixed_header: [b[0], b[1], b[2], b[3]],
            timestamp_raw: u16::from_le_bytes([b[4], b[5]]),
            transaction_type_raw: [b[6], b[7]],
            from_station_code: b[8],
            reserved: b[9],
            to_station_code: b[10],
            balance: u32::from_le_bytes([b[11], b[12], b[13], 0]),
            trailing: [b[14], b[15]],
        }
    }

    /// Rebuild the on-card byte layout. Only the low 24 bits of `balance`
    /// are stored.
    pub fn to_bytes(&self) -> [u8; BLOCK_SIZE] {
        let mut out = [0u8; BLOCK_SIZE];
        out[0..4].copy_from_slice(&self.fixed_header);
        out[4..6].copy_from_slice(&self.timestamp_raw.to_le_bytes());
        out[6..8].copy_from_slice(&self.transaction_type_raw);
        out[8] = self.from_station_code;
        out[9] = self.reserved;
        out[10] = self.to_station_code;
        out[11..14].copy_from_slice(&self.balance.to_le_bytes()[..3]);
        out[14..16].copy_from_slice(&self.trailing);
        out
    }

    /// Header as spaced uppercase hex, e.g. `08 52 10 00`.
    pub fn fixed_header_hex(&self) -> String {
        to_hex_string(&self.fixed_header)
    }

    /// Exact prefix match of the header against the fare signature.
    pub fn transaction_type(&self) -> TransactionType {
        if self.fixed_header_hex().starts_with(FARE_HEADER_SIGNATURE) {
            TransactionType::Fare
        } else {
            TransactionType::Recharge
        }
    }

    /// Turn the raw fields into a [`Transaction`]. `previous_balance` is the
    /// balance of the previously decoded block, if any.
    pub fn into_transaction(self, previous_balance: Option<u32>) -> Transaction {
        let amount = previous_balance
            .map(|prev| self.balance.abs_diff(prev))
            .unwrap_or(0);

        Transaction {
            id: Uuid::new_v4(),
            timestamp: timestamp::decode_timestamp(self.timestamp_raw),
            transaction_type: self.transaction_type(),
            from_station: station::name(self.from_station_code),
            to_station: station::name(self.to_station_code),
            amount,
            balance: self.balance,
            fixed_header: self.fixed_header_hex(),
            trailing: to_hex_string(&self.trailing),
        }
    }
}

/// Decode one 16-byte block. Fails only with `InvalidBlockSize`.
pub fn decode_block(block: &[u8], previous_balance: Option<u32>) -> Result<Transaction> {
    let raw = RawBlock::parse(block)?;
    Ok(raw.into_transaction(previous_balance))
}
