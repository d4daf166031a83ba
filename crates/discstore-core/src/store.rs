//! # Music Store
//!
//! Registry of discs keyed by identifier.
//!
//! ## Key Operations
//! - Register discs (duplicates ignored, never overwritten)
//! - Look up by id or by exact artist name
//! - Sell/supply by id (delegates to the addressed [`Disc`])
//! - Worst-selling disc
//!
//! ## Insertion Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Discs Are Stored                                 │
//! │                                                                         │
//! │  order: ["A1", "B1", "C1"]         discs: { "B1" → Disc, ... }          │
//! │           │                                  ▲                          │
//! │           └──── iter() walks order ──────────┘                          │
//! │                                                                         │
//! │  find_by_id       → map lookup                                          │
//! │  find_by_artist   → results in insertion order                          │
//! │  worst_selling    → first disc at the minimum in insertion order        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! Single-actor. A host that shares one store between threads serializes
//! access itself (e.g. `Mutex<MusicStore>`).

use std::collections::HashMap;

use tracing::debug;

use crate::disc::Disc;
use crate::error::{LedgerError, LedgerResult};
use crate::money::Money;
use crate::types::Transaction;
use crate::validation::{validate_artist, validate_disc_id, validate_price, validate_title};

/// The disc catalog and its stock ledger.
///
/// ## Usage
/// ```rust
/// use discstore_core::{Money, MusicStore};
///
/// let mut store = MusicStore::new();
/// let (sale, purchase) = (Money::from_cents(1599), Money::from_cents(900));
/// store.add_disc("A1", "Blue Train", "John Coltrane", sale, purchase, 4);
///
/// assert!(store.supply_disc("A1", 2));
/// assert!(!store.supply_disc("ZZ", 2));
/// assert_eq!(store.find_by_id("A1").map(|d| d.quantity()), Some(6));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MusicStore {
    discs: HashMap<String, Disc>,
    order: Vec<String>,
}

impl MusicStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Registers a disc with no history and no songs.
    ///
    /// An identifier that is already registered is ignored: the existing
    /// disc is left as it is. Returns whether a disc was inserted.
    pub fn add_disc(
        &mut self,
        id: &str,
        title: &str,
        artist: &str,
        sale_price: Money,
        purchase_price: Money,
        quantity: u64,
    ) -> bool {
        if self.discs.contains_key(id) {
            debug!(id = %id, "Ignoring duplicate disc");
            return false;
        }

        self.insert(Disc::new(
            id,
            title,
            artist,
            sale_price,
            purchase_price,
            quantity,
        ));
        true
    }

    /// Validating form of [`MusicStore::add_disc`].
    ///
    /// ## Returns
    /// - `Ok(&Disc)` - the newly registered disc
    /// - `Err(LedgerError::Validation)` - bad id, title, artist or price
    /// - `Err(LedgerError::DuplicateDisc)` - id taken, nothing changed
    pub fn try_add_disc(
        &mut self,
        id: &str,
        title: &str,
        artist: &str,
        sale_price: Money,
        purchase_price: Money,
        quantity: u64,
    ) -> LedgerResult<&Disc> {
        validate_disc_id(id)?;
        validate_title(title)?;
        validate_artist(artist)?;
        validate_price("sale_price", sale_price)?;
        validate_price("purchase_price", purchase_price)?;

        if self.discs.contains_key(id) {
            debug!(id = %id, "Rejecting duplicate disc");
            return Err(LedgerError::DuplicateDisc(id.to_string()));
        }

        Ok(self.insert(Disc::new(
            id,
            title,
            artist,
            sale_price,
            purchase_price,
            quantity,
        )))
    }

    fn insert(&mut self, disc: Disc) -> &Disc {
        debug!(id = %disc.id(), quantity = disc.quantity(), "Adding disc");

        let id = disc.id().to_string();
        self.order.push(id.clone());
        self.discs.entry(id).or_insert(disc)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Looks up a disc by identifier.
    pub fn find_by_id(&self, id: &str) -> Option<&Disc> {
        self.discs.get(id)
    }

    /// Mutable lookup, e.g. for adding songs after registration.
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Disc> {
        self.discs.get_mut(id)
    }

    /// Discs whose artist equals `artist` exactly (case-sensitive),
    /// in insertion order.
    pub fn find_by_artist(&self, artist: &str) -> Vec<&Disc> {
        let found: Vec<&Disc> = self.iter().filter(|d| d.artist() == artist).collect();
        debug!(artist = %artist, count = found.len(), "Artist search returned discs");
        found
    }

    /// The disc with the fewest copies sold.
    ///
    /// Ties go to the disc registered first. `None` for an empty store.
    pub fn worst_selling_disc(&self) -> Option<&Disc> {
        // min_by_key keeps the first of equal minima
        self.iter().min_by_key(|d| d.copies_sold())
    }

    /// All discs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Disc> + '_ {
        self.order.iter().filter_map(move |id| self.discs.get(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.discs.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // =========================================================================
    // Stock Movements
    // =========================================================================

    /// Sells copies of the addressed disc.
    ///
    /// `false` when the id is unknown or stock is insufficient.
    pub fn sell_disc(&mut self, id: &str, copies: u32) -> bool {
        self.try_sell_disc(id, copies).is_ok()
    }

    /// Typed form of [`MusicStore::sell_disc`].
    pub fn try_sell_disc(&mut self, id: &str, copies: u32) -> LedgerResult<&Transaction> {
        let disc = self.disc_mut(id)?;
        match disc.try_sell(copies) {
            Ok(tx) => {
                debug!(id = %id, copies, "Sold disc");
                Ok(tx)
            }
            Err(err) => {
                debug!(id = %id, copies, error = %err, "Sale rejected");
                Err(err)
            }
        }
    }

    /// Supplies copies of the addressed disc.
    ///
    /// `false` only when the id is unknown.
    pub fn supply_disc(&mut self, id: &str, copies: u32) -> bool {
        self.try_supply_disc(id, copies).is_ok()
    }

    /// Typed form of [`MusicStore::supply_disc`].
    pub fn try_supply_disc(&mut self, id: &str, copies: u32) -> LedgerResult<&Transaction> {
        let disc = self.disc_mut(id)?;
        debug!(id = %id, copies, quantity = disc.quantity(), "Supplying disc");
        Ok(disc.record_supply(copies))
    }

    fn disc_mut(&mut self, id: &str) -> LedgerResult<&mut Disc> {
        self.discs.get_mut(id).ok_or_else(|| {
            debug!(id = %id, "Disc not found");
            LedgerError::DiscNotFound(id.to_string())
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn price(cents: i64) -> Money {
        Money::from_cents(cents)
    }

    fn store_with(discs: &[(&str, &str, u64)]) -> MusicStore {
        let mut store = MusicStore::new();
        for (id, artist, quantity) in discs {
            let title = format!("Title {id}");
            store.add_disc(id, &title, artist, price(1999), price(999), *quantity);
        }
        store
    }

    #[test]
    fn test_add_and_find() {
        let store = store_with(&[("A1", "Miles Davis", 10)]);

        let disc = store.find_by_id("A1").unwrap();
        assert_eq!(disc.title(), "Title A1");
        assert_eq!(disc.quantity(), 10);
        assert!(store.find_by_id("nope").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_add_is_ignored() {
        let mut store = store_with(&[("A1", "Miles Davis", 10)]);

        let inserted = store.add_disc("A1", "Other", "Someone", price(1), price(1), 99);

        assert!(!inserted);
        let disc = store.find_by_id("A1").unwrap();
        assert_eq!(disc.artist(), "Miles Davis");
        assert_eq!(disc.quantity(), 10);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_try_add_disc_reports_duplicate() {
        let mut store = store_with(&[("A1", "Miles Davis", 10)]);

        let err = store
            .try_add_disc("A1", "Other", "Someone", price(1), price(1), 99)
            .unwrap_err();
        assert_eq!(err, LedgerError::DuplicateDisc("A1".to_string()));
        assert_eq!(store.find_by_id("A1").unwrap().quantity(), 10);
    }

    #[test]
    fn test_try_add_disc_validates() {
        let mut store = MusicStore::new();

        let err = store
            .try_add_disc("", "T", "A", price(1), price(1), 1)
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(ValidationError::Required { .. })
        ));

        let err = store
            .try_add_disc("A1", "T", "A", price(-5), price(1), 1)
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(ValidationError::OutOfRange { .. })
        ));

        assert!(store.is_empty());

        let disc = store
            .try_add_disc("A1", "T", "A", price(0), price(0), 1)
            .unwrap();
        assert_eq!(disc.id(), "A1");
    }

    #[test]
    fn test_try_add_disc_rejects_padded_id() {
        let mut store = MusicStore::new();

        let err = store
            .try_add_disc(" A1 ", "T", "A", price(1), price(1), 1)
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(ValidationError::InvalidFormat { .. })
        ));
        assert!(store.is_empty());
        assert!(store.find_by_id(" A1 ").is_none());

        let err = store
            .try_add_disc("A1", "T", "Miles Davis ", price(1), price(1), 1)
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(ValidationError::InvalidFormat { .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_find_by_artist_exact_and_ordered() {
        let store = store_with(&[
            ("C3", "Nina Simone", 1),
            ("A1", "Miles Davis", 1),
            ("B2", "Nina Simone", 1),
            ("D4", "nina simone", 1),
        ]);

        let ids: Vec<_> = store
            .find_by_artist("Nina Simone")
            .iter()
            .map(|d| d.id())
            .collect();
        assert_eq!(ids, vec!["C3", "B2"]);
        assert!(store.find_by_artist("Nobody").is_empty());
    }

    #[test]
    fn test_sell_and_supply_unknown_id() {
        let mut store = MusicStore::new();

        assert!(!store.sell_disc("X", 1));
        assert!(!store.supply_disc("X", 1));
        assert_eq!(
            store.try_sell_disc("X", 1).unwrap_err(),
            LedgerError::DiscNotFound("X".to_string())
        );
    }

    #[test]
    fn test_sell_delegates_to_disc() {
        let mut store = store_with(&[("A1", "Miles Davis", 10)]);

        assert!(store.sell_disc("A1", 3));
        assert!(!store.sell_disc("A1", 8));

        let disc = store.find_by_id("A1").unwrap();
        assert_eq!(disc.quantity(), 7);
        assert_eq!(disc.copies_sold(), 3);
    }

    #[test]
    fn test_try_supply_returns_record() {
        let mut store = store_with(&[("A1", "Miles Davis", 0)]);

        let tx = store.try_supply_disc("A1", 4).unwrap();
        assert!(tx.is_supply());
        assert_eq!(tx.copies(), 4);
        assert_eq!(store.find_by_id("A1").unwrap().quantity(), 4);
    }

    #[test]
    fn test_worst_selling_empty_store() {
        assert!(MusicStore::new().worst_selling_disc().is_none());
    }

    #[test]
    fn test_worst_selling_tie_goes_to_first_inserted() {
        let mut store = store_with(&[("Z9", "X", 10), ("A1", "Y", 10), ("M5", "Z", 10)]);

        assert_eq!(store.worst_selling_disc().unwrap().id(), "Z9");

        store.sell_disc("Z9", 1);
        assert_eq!(store.worst_selling_disc().unwrap().id(), "A1");

        store.sell_disc("A1", 2);
        store.sell_disc("M5", 1);
        assert_eq!(store.worst_selling_disc().unwrap().id(), "Z9");
    }

    #[test]
    fn test_find_by_id_mut_adds_songs() {
        let mut store = store_with(&[("A1", "Miles Davis", 1)]);

        store.find_by_id_mut("A1").unwrap().add_song("So What");

        assert_eq!(store.find_by_id("A1").unwrap().songs(), ["So What"]);
    }

    #[test]
    fn test_iter_follows_insertion_order() {
        let store = store_with(&[("B", "x", 1), ("A", "x", 1), ("C", "x", 1)]);
        let ids: Vec<_> = store.iter().map(|d| d.id()).collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
        assert!(store.contains("A"));
        assert!(!store.contains("D"));
    }
}
