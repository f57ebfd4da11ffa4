// mrtcard/src/protocol/parser.rs

//! Bounds-checked field readers for fixed-offset binary layouts.
//!
//! Multi-byte integers on the card are little-endian. Every reader returns
//! `Error::InvalidLength` instead of panicking when the field runs past the
//! end of the buffer.

use crate::types::Idm;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx.saturating_add(1))?;
    Ok(data[idx])
}

/// Read a little-endian u16 at given index, with bounds checking.
pub fn le_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    ensure_len(data, idx.saturating_add(2))?;
    Ok(u16::from_le_bytes([data[idx], data[idx + 1]]))
}

/// Read a little-endian 24-bit unsigned integer at given index.
pub fn le_u24_at(data: &[u8], idx: usize) -> Result<u32> {
    ensure_len(data, idx.saturating_add(3))?;
    Ok(u32::from_le_bytes([data[idx], data[idx + 1], data[idx + 2], 0]))
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx.saturating_add(len))?;
    Ok(&data[idx..idx + len])
}

/// Parse an Idm (8 bytes) at `start` index with bounds checking.
pub fn idm_at(data: &[u8], start: usize) -> Result<Idm> {
    let s = slice_at(data, start, 8)?;
    Idm::try_from(s)
}

/// Ensure the byte at `idx` (a response code) equals `expected`.
pub fn expect_response_code(data: &[u8], idx: usize, expected: u8) -> Result<()> {
    let actual = byte_at(data, idx)?;
    if actual != expected {
        return Err(Error::UnexpectedResponse { expected, actual });
    }
    Ok(())
}
