//! # discstore-core: In-Memory Inventory Ledger
//!
//! This crate tracks stock levels and sell/supply history for a catalog of
//! disc products. It has zero I/O dependencies: the host application owns
//! the [`MusicStore`] instance and decides how long it lives.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Ledger Model                                   │
//! │                                                                         │
//! │  MusicStore ──owns──► Disc ("A1") ──owns──► [Transaction, ...]          │
//! │             │                       └─owns──► [song title, ...]         │
//! │             └─owns──► Disc ("B1") ──owns──► [Transaction, ...]          │
//! │                                                                         │
//! │  sell_disc / supply_disc ──delegates──► Disc::sell / Disc::supply       │
//! │                                           │                             │
//! │                                           └──► quantity ± copies        │
//! │                                                + append Transaction     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Transaction records and their kind
//! - [`disc`] - Catalog item with stock and history
//! - [`store`] - Registry of discs keyed by identifier
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for hosts
//!
//! ## Example Usage
//!
//! ```rust
//! use discstore_core::{Money, MusicStore};
//!
//! let mut store = MusicStore::new();
//! let (sale, purchase) = (Money::from_cents(1999), Money::from_cents(1200));
//! store.add_disc("A1", "Kind of Blue", "Miles Davis", sale, purchase, 10);
//!
//! assert!(store.sell_disc("A1", 3));
//! assert!(!store.sell_disc("A1", 100));
//!
//! let disc = store.find_by_id("A1").unwrap();
//! assert_eq!(disc.quantity(), 7);
//! assert_eq!(disc.copies_sold(), 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod disc;
pub mod error;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use disc::Disc;
pub use error::{LedgerError, LedgerResult, ValidationError};
pub use money::Money;
pub use store::MusicStore;
pub use types::{Transaction, TransactionKind};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a disc identifier.
pub const MAX_DISC_ID_LEN: usize = 50;

/// Maximum length of a title or artist name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum copies a host may move in a single sell or supply request.
///
/// ## Business Reason
/// Guards against typing 10000 instead of 10 at the counter.
pub const MAX_COPIES_PER_TRANSACTION: u32 = 9_999;
