// mrtcard/src/prelude.rs

pub use crate::card::{
    CachedData, LocalizedName, RawBlock, Transaction, TransactionSummary, TransactionType,
    decode_block,
};
pub use crate::protocol::{build_polling_command, build_read_command, parse_response};
pub use crate::reader::{NfcReader, ReadOutcome, ReadReport, ReaderConfig};
pub use crate::transport::{TagEvent, TagTransport};
pub use crate::{BlockData, Error, Idm, Result, ServiceCode, SystemCode, TagId, TransportErrorKind};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, ms, parse_hex, to_hex_string};
