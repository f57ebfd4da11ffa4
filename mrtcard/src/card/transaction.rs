// mrtcard/src/card/transaction.rs

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::station::LocalizedName;

/// Kind of card event, derived from the block header signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum TransactionType {
    /// Journey charged at the exit gate.
    Fare,
    /// Top-up at a ticket machine or counter.
    Recharge,
}

impl TransactionType {
    /// Wire label, `FARE` or `RECHARGE`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fare => "FARE",
            Self::Recharge => "RECHARGE",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One decoded history entry.
///
/// Built once by the block codec and never mutated afterwards. For a
/// recharge, `to_station` carries whatever code the terminal wrote and
/// should be shown as "not applicable".
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Transaction {
    /// Random per decode, not stored on the card.
    pub id: Uuid,
    /// When the transaction happened.
    pub timestamp: DateTime<Utc>,
    /// Fare or recharge.
    pub transaction_type: TransactionType,
    /// Origin, or the recharge location.
    pub from_station: LocalizedName,
    /// Destination.
    pub to_station: LocalizedName,
    /// `|balance - previous balance|`, or 0 for the first decoded block.
    pub amount: u32,
    /// Balance stored on the card after this transaction.
    pub balance: u32,
    /// Bytes 0..4 as spaced uppercase hex.
    pub fixed_header: String,
    /// Bytes 14..16 as spaced uppercase hex.
    pub trailing: String,
}

impl Transaction {
    /// True for fare entries.
    pub fn is_fare(&self) -> bool {
        self.transaction_type == TransactionType::Fare
    }

    /// Destination name, absent for recharges.
    pub fn destination(&self) -> Option<&LocalizedName> {
        match self.transaction_type {
            TransactionType::Fare => Some(&self.to_station),
            TransactionType::Recharge => None,
        }
    }
}

/// Totals over a transaction history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TransactionSummary {
    /// Sum of fare amounts.
    pub total_spent: u64,
    /// Sum of recharge amounts.
    pub total_recharge: u64,
    /// Number of fare entries.
    pub journeys: usize,
}

impl TransactionSummary {
    /// Fold a history into totals.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        transactions
            .iter()
            .fold(Self::default(), |mut acc, tx| {
                match tx.transaction_type {
                    TransactionType::Fare => {
                        acc.total_spent += u64::from(tx.amount);
                        acc.journeys += 1;
                    }
                    TransactionType::Recharge => {
                        acc.total_recharge += u64::from(tx.amount);
                    }
                }
                acc
            })
    }
}
