// mrtcard/src/card/mod.rs

//! Card data model: the transaction block codec and the reference data it
//! needs (station names, timestamp epoch).

/// Block codec.
pub mod block;
mod info;
/// Station directory.
pub mod station;
/// Minute-counter timestamps.
pub mod timestamp;
/// Decoded transaction model.
pub mod transaction;

pub use block::{RawBlock, decode_block};
pub use info::CachedData;
pub use station::{LocalizedName, Station};
pub use transaction::{Transaction, TransactionSummary, TransactionType};
