// mrtcard/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! These build well-formed card frames so tests across the crate and the
//! tests/ directory can seed a [`MockTransport`](crate::transport::MockTransport)
//! with the same data.
#![allow(dead_code)]

use crate::constants::{BLOCK_SIZE, FELICA_RESP_POLLING, READ_RESPONSE_HEADER_LEN};
use crate::types::Idm;
use crate::utils::parse_hex;
use crate::{Error, Result};

/// Response code of Read Without Encryption.
const RESP_READ_WITHOUT_ENCRYPTION: u8 = 0x07;

/// Header signature of fare blocks.
pub const FARE_HEADER: [u8; 4] = [0x08, 0x52, 0x10, 0x00];
/// A header that does not match the fare signature.
pub const RECHARGE_HEADER: [u8; 4] = [0x08, 0x52, 0x20, 0x00];

/// Fixed IDm used across tests.
#[doc(hidden)]
pub fn sample_idm() -> Idm {
    Idm::from_bytes([0x01, 0x2e, 0x4c, 0xd8, 0x9a, 0x10, 0x33, 0x07])
}

/// Polling response: length + 0x01 + IDm + PMm.
#[doc(hidden)]
pub fn polling_response(idm: &Idm) -> Vec<u8> {
    let mut data = vec![18, FELICA_RESP_POLLING];
    data.extend_from_slice(idm.as_bytes());
    data.extend_from_slice(&[0x10, 0x0b, 0x4b, 0x42, 0x84, 0x85, 0xd0, 0xff]);
    data
}

/// Most blocks a read response can carry: 13 + 15 * 16 = 253 bytes.
pub const MAX_RESPONSE_BLOCKS: usize = (u8::MAX as usize - READ_RESPONSE_HEADER_LEN) / BLOCK_SIZE;

/// Successful read response carrying `blocks`. At most
/// [`MAX_RESPONSE_BLOCKS`] blocks.
#[doc(hidden)]
pub fn read_response(blocks: &[[u8; BLOCK_SIZE]]) -> Vec<u8> {
    read_response_with_status(&sample_idm(), 0x00, 0x00, blocks)
}

/// Read response with explicit status flags.
///
/// Panics above [`MAX_RESPONSE_BLOCKS`]: the one-byte length field cannot
/// describe a longer frame.
#[doc(hidden)]
pub fn read_response_with_status(
    idm: &Idm,
    status1: u8,
    status2: u8,
    blocks: &[[u8; BLOCK_SIZE]],
) -> Vec<u8> {
    assert!(
        blocks.len() <= MAX_RESPONSE_BLOCKS,
        "{} blocks do not fit one read response",
        blocks.len()
    );
    let len = READ_RESPONSE_HEADER_LEN + blocks.len() * BLOCK_SIZE;
    let mut data = Vec::with_capacity(len);
    data.push(len as u8);
    data.push(RESP_READ_WITHOUT_ENCRYPTION);
    data.extend_from_slice(idm.as_bytes());
    data.push(status1);
    data.push(status2);
    data.push(blocks.len() as u8);
    for b in blocks {
        data.extend_from_slice(b);
    }
    data
}

fn block(header: [u8; 4], from: u8, to: u8, balance: u32, minutes: u16) -> [u8; BLOCK_SIZE] {
    let mut b = [0u8; BLOCK_SIZE];
    b[0..4].copy_from_slice(&header);
    b[4..6].copy_from_slice(&minutes.to_le_bytes());
    b[8] = from;
    b[10] = to;
    b[11..14].copy_from_slice(&balance.to_le_bytes()[..3]);
    b
}

/// Fare block from station `from` to `to`, leaving `balance` on the card.
#[doc(hidden)]
pub fn fare_block(from: u8, to: u8, balance: u32, minutes: u16) -> [u8; BLOCK_SIZE] {
    block(FARE_HEADER, from, to, balance, minutes)
}

/// Recharge block made at station `at`.
#[doc(hidden)]
pub fn recharge_block(at: u8, balance: u32, minutes: u16) -> [u8; BLOCK_SIZE] {
    block(RECHARGE_HEADER, at, 0, balance, minutes)
}

/// Parse a 16-byte block written as hex, spaces allowed.
#[doc(hidden)]
pub fn block_from_hex(s: &str) -> Result<[u8; BLOCK_SIZE]> {
    let bytes = parse_hex(s).map_err(Error::InvalidArgument)?;
    <[u8; BLOCK_SIZE]>::try_from(bytes.as_slice()).map_err(|_| Error::InvalidBlockSize {
        actual: bytes.len(),
    })
}
