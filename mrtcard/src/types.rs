// mrtcard/src/types.rs

use crate::Error;
use std::convert::TryFrom;

/// IDm - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Idm([u8; 8]);

impl Idm {
    /// Wrap raw bytes.
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Lowercase hex, no separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Idm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 8] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 8,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// SystemCode (u16)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SystemCode(u16);

impl SystemCode {
    /// Wildcard: any system on the card answers the poll.
    pub const ANY: Self = Self(0xffff);

    /// Wrap a raw code.
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Raw code.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Wire order, low byte first.
    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }
}

/// ServiceCode (u16)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceCode(u16);

impl ServiceCode {
    /// Transaction history service on MRT cards.
    pub const HISTORY: Self = Self(0x220f);

    /// Wrap a raw code.
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Raw code.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Wire order, low byte first.
    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }
}

impl Default for ServiceCode {
    fn default() -> Self {
        Self::HISTORY
    }
}

/// BlockData (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; 16]);

impl BlockData {
    /// Wrap raw bytes.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Spaced uppercase hex.
    pub fn to_hex(&self) -> String {
        crate::utils::to_hex_string(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 16] = bytes
            .try_into()
            .map_err(|_| Error::InvalidBlockSize {
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }
}

/// Opaque tag identifier carried by a tag-presence event.
///
/// The host transport decides its format (usually a serial number string);
/// it is only used to route command frames back to the same tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagId(String);

impl TagId {
    /// Wrap a host-provided identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TagId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
