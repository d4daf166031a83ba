//! # Disc
//!
//! A catalog item with its stock level, song list and movement history.
//!
//! ## Stock Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Disc Stock Operations                              │
//! │                                                                         │
//! │  sell(c) ───► c > quantity? ──yes──► false, nothing changes            │
//! │                    │                                                    │
//! │                    no                                                   │
//! │                    ▼                                                    │
//! │               quantity -= c, push Sell(c) ──► true                      │
//! │                                                                         │
//! │  supply(c) ─► quantity += c, push Supply(c)      (always succeeds)      │
//! │                                                                         │
//! │  Invariant: quantity == initial + Σ supply copies − Σ sell copies       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::fmt;

use crate::error::{LedgerError, LedgerResult};
use crate::money::Money;
use crate::types::{Transaction, TransactionKind};

/// A disc in the catalog.
///
/// Fields are private so the stock invariant can only change through
/// [`Disc::sell`] and [`Disc::supply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Disc {
    id: String,
    title: String,
    artist: String,
    sale_price: Money,
    purchase_price: Money,
    initial_quantity: u64,
    quantity: u64,
    transactions: Vec<Transaction>,
    songs: Vec<String>,
}

impl Disc {
    /// Creates a disc with no history and no songs.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        sale_price: Money,
        purchase_price: Money,
        quantity: u64,
    ) -> Self {
        Disc {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            sale_price,
            purchase_price,
            initial_quantity: quantity,
            quantity,
            transactions: Vec::new(),
            songs: Vec::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn sale_price(&self) -> Money {
        self.sale_price
    }

    pub fn purchase_price(&self) -> Money {
        self.purchase_price
    }

    /// Copies currently on the shelf.
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Copies on the shelf when the disc was registered.
    pub fn initial_quantity(&self) -> u64 {
        self.initial_quantity
    }

    /// Recorded movements, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn songs(&self) -> &[String] {
        &self.songs
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Appends a song title. No deduplication.
    pub fn add_song(&mut self, title: impl Into<String>) {
        self.songs.push(title.into());
    }

    /// Sells `copies` copies if that many are in stock.
    ///
    /// Returns `false` and leaves the disc untouched otherwise.
    /// `copies == quantity` succeeds and empties the shelf.
    pub fn sell(&mut self, copies: u32) -> bool {
        self.try_sell(copies).is_ok()
    }

    /// Typed form of [`Disc::sell`].
    ///
    /// ## Returns
    /// - `Ok(&Transaction)` - the Sell record that was appended
    /// - `Err(LedgerError::InsufficientStock)` - nothing was changed
    pub fn try_sell(&mut self, copies: u32) -> LedgerResult<&Transaction> {
        let requested = u64::from(copies);
        if requested > self.quantity {
            return Err(LedgerError::InsufficientStock {
                id: self.id.clone(),
                available: self.quantity,
                requested: copies,
            });
        }

        self.quantity -= requested;
        Ok(self.record(TransactionKind::Sell, copies))
    }

    /// Receives `copies` copies from a supplier. Always succeeds.
    pub fn supply(&mut self, copies: u32) {
        self.record_supply(copies);
    }

    /// [`Disc::supply`], handing back the appended Supply record.
    pub fn record_supply(&mut self, copies: u32) -> &Transaction {
        self.quantity += u64::from(copies);
        self.record(TransactionKind::Supply, copies)
    }

    fn record(&mut self, kind: TransactionKind, copies: u32) -> &Transaction {
        self.transactions.push(Transaction::new(kind, copies));
        &self.transactions[self.transactions.len() - 1]
    }

    // =========================================================================
    // Aggregates
    // =========================================================================

    /// Total copies across all Sell records.
    pub fn copies_sold(&self) -> u64 {
        self.total_copies(TransactionKind::Sell)
    }

    /// Total copies across all Supply records.
    pub fn copies_supplied(&self) -> u64 {
        self.total_copies(TransactionKind::Supply)
    }

    fn total_copies(&self, kind: TransactionKind) -> u64 {
        self.transactions
            .iter()
            .filter(|t| t.kind() == kind)
            .map(|t| u64::from(t.copies()))
            .sum()
    }

    /// The most recent movement, if any.
    pub fn last_transaction(&self) -> Option<&Transaction> {
        self.transactions.last()
    }
}

/// Multi-line description for display.
///
/// ```text
/// ID: A1
/// Title: Kind of Blue
/// Artist: Miles Davis
/// Song List: So What, Freddie Freeloader
/// ```
impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Artist: {}", self.artist)?;
        write!(f, "Song List: {}", self.songs.join(", "))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
