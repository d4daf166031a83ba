//! # Domain Types
//!
//! Ledger records shared by discs and the store.
//!
//! ## Transaction Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Transaction Lifecycle                              │
//! │                                                                         │
//! │  Disc::sell(3) succeeds ──► Transaction { kind: Sell,   copies: 3 }    │
//! │  Disc::supply(2)        ──► Transaction { kind: Supply, copies: 2 }    │
//! │  Disc::sell(99) fails   ──► (nothing recorded)                          │
//! │                                                                         │
//! │  Created exactly once, never mutated, never deleted.                    │
//! │  Owned by the disc it was recorded on, in chronological order.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! - `id`: UUID v4 - immutable identity of the record
//! - position in `Disc::transactions()` - chronological order

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// Transaction Kind
// =============================================================================

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Copies left the shelf.
    Sell,
    /// Copies arrived from a supplier.
    Supply,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Sell => write!(f, "sell"),
            TransactionKind::Supply => write!(f, "supply"),
        }
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// An immutable record of one sell or supply event.
///
/// The constructor trusts its caller on `copies`: both call sites in
/// [`crate::Disc`] run only after the movement has been accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    id: Uuid,
    kind: TransactionKind,
    copies: u32,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Records a movement, stamped with the current time.
    pub fn new(kind: TransactionKind, copies: u32) -> Self {
        Transaction {
            id: Uuid::new_v4(),
            kind,
            copies,
            timestamp: Utc::now(),
        }
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    #[inline]
    pub fn copies(&self) -> u32 {
        self.copies
    }

    /// When the movement was recorded.
    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[inline]
    pub fn is_sell(&self) -> bool {
        self.kind == TransactionKind::Sell
    }

    #[inline]
    pub fn is_supply(&self) -> bool {
        self.kind == TransactionKind::Supply
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction_is_stamped() {
        let before = Utc::now();
        let tx = Transaction::new(TransactionKind::Sell, 3);
        let after = Utc::now();

        assert_eq!(tx.kind(), TransactionKind::Sell);
        assert_eq!(tx.copies(), 3);
        assert!(tx.timestamp() >= before && tx.timestamp() <= after);
        assert!(tx.is_sell());
        assert!(!tx.is_supply());
    }

    #[test]
    fn test_transactions_have_distinct_ids() {
        let a = Transaction::new(TransactionKind::Supply, 1);
        let b = Transaction::new(TransactionKind::Supply, 1);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_kind_display_and_serde() {
        assert_eq!(TransactionKind::Sell.to_string(), "sell");
        assert_eq!(TransactionKind::Supply.to_string(), "supply");
        assert_eq!(
            serde_json::to_string(&TransactionKind::Supply).unwrap(),
            "\"supply\""
        );
    }
}
