// mrtcard/src/card/info.rs

use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::transaction::{Transaction, TransactionSummary};
use crate::types::Idm;

/// Snapshot of the last successful read, in the shape persisted by callers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CachedData {
    /// When the card was read.
    pub last_read_time: DateTime<Utc>,
    /// Newest first, as returned by the card.
    pub transactions: Vec<Transaction>,
    /// Balance of the newest transaction.
    pub last_balance: u32,
    /// Card IDm as lowercase hex, when known.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub card_number: Option<String>,
}

impl CachedData {
    /// Build a snapshot. `last_balance` is the balance of the newest (first)
    /// transaction, or 0 for an empty history.
    pub fn from_transactions(
        transactions: Vec<Transaction>,
        last_read_time: DateTime<Utc>,
        idm: Option<&Idm>,
    ) -> Self {
        let last_balance = transactions.first().map(|t| t.balance).unwrap_or(0);
        Self {
            last_read_time,
            transactions,
            last_balance,
            card_number: idm.map(Idm::to_hex),
        }
    }

    /// Totals over the cached history.
    pub fn summary(&self) -> TransactionSummary {
        TransactionSummary::from_transactions(&self.transactions)
    }
}
