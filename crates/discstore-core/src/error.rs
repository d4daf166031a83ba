//! # Error Types
//!
//! Domain-specific error types for discstore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  discstore-core errors (this file)                                     │
//! │  ├── LedgerError      - Ledger rule violations                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  host errors (apps/ledger)                                             │
//! │  └── AppError         - Config, I/O and usage failures                 │
//! │                                                                         │
//! │  Flow: ValidationError → LedgerError → AppError → terminal             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The plain ledger operations (`sell_disc`, `find_by_id`, ...) report
//! failure as `false` / `None`. These types back their `try_*` companions,
//! which carry the reason.

use thiserror::Error;

// =============================================================================
// Ledger Error
// =============================================================================

/// Ledger rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// No disc is registered under the identifier.
    #[error("Disc not found: {0}")]
    DiscNotFound(String),

    /// Selling more copies than are in stock.
    ///
    /// ## User Workflow
    /// ```text
    /// sell A1 × 5
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { id: "A1", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// Nothing recorded, quantity stays 3
    /// ```
    #[error("Insufficient stock for {id}: available {available}, requested {requested}")]
    InsufficientStock {
        id: String,
        available: u64,
        requested: u32,
    },

    /// A disc with this identifier is already registered.
    #[error("Disc '{0}' already exists")]
    DuplicateDisc(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., characters outside the allowed set).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;
