// mrtcard/src/lib.rs

//! mrtcard
//!
//! Reads the transaction history of FeliCa-based MRT transit cards and
//! decodes it into typed fare and recharge records with running balance.
#![warn(missing_docs)]

/// Card data model and block codec.
pub mod card;
/// Protocol and layout constants.
pub mod constants;
/// Error type.
pub mod error;
/// Common imports.
pub mod prelude;
/// Command and response wire formats.
pub mod protocol;
/// Read session controller.
pub mod reader;
/// Frame builders for tests.
pub mod test_support;
/// Host NFC transport seam.
pub mod transport;
/// Newtypes for card identifiers and codes.
pub mod types;
/// Small shared helpers.
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
