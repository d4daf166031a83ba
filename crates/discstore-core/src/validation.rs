//! # Validation Module
//!
//! Input validation for hosts that accept catalog data from people.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Host (config file, command line)                             │
//! │  ├── Parse strings into numbers and Money                              │
//! │  └── THIS MODULE: screen ids, names, prices, copy counts               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: MusicStore / Disc                                            │
//! │  ├── Duplicate ids ignored (or DuplicateDisc from try_add_disc)        │
//! │  └── Overselling rejected atomically                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The ledger itself trusts its callers on copy counts; a host runs
//! [`validate_copies`] before calling `sell_disc` or `supply_disc`.
//!
//! ## Usage
//! ```rust
//! use discstore_core::validation::{validate_disc_id, validate_copies};
//!
//! assert!(validate_disc_id("A1").is_ok());
//! assert_eq!(validate_copies(5).unwrap(), 5);
//! assert!(validate_copies(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_COPIES_PER_TRANSACTION, MAX_DISC_ID_LEN, MAX_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a disc identifier.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only alphanumeric characters, hyphens, underscores (so no surrounding
///   whitespace either; the id is used verbatim as the lookup key)
pub fn validate_disc_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.chars().count() > MAX_DISC_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_DISC_ID_LEN,
        });
    }

    if !id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_') {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a disc title.
pub fn validate_title(title: &str) -> ValidationResult<()> {
    validate_name("title", title)
}

/// Validates an artist name.
pub fn validate_artist(artist: &str) -> ValidationResult<()> {
    validate_name("artist", artist)
}

fn validate_name(field: &str, value: &str) -> ValidationResult<()> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    // find_by_artist matches exactly
    if trimmed.len() != value.len() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must not start or end with whitespace".to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed for promotional discs)
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Screens a copy count before it reaches the ledger.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_COPIES_PER_TRANSACTION (9999)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Counter: sell A1 <copies>                                              │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_copies(n) ← THIS FUNCTION                                    │
/// │       │                                                                 │
/// │       ├── n <= 0?    → Error: "copies must be positive"                │
/// │       ├── n > 9999?  → Error: "copies must be between 1 and 9999"      │
/// │       └── OK(n as u32) → store.try_sell_disc("A1", n)                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_copies(copies: i64) -> ValidationResult<u32> {
    if copies <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "copies".to_string(),
        });
    }

    if copies > i64::from(MAX_COPIES_PER_TRANSACTION) {
        return Err(ValidationError::OutOfRange {
            field: "copies".to_string(),
            min: 1,
            max: i64::from(MAX_COPIES_PER_TRANSACTION),
        });
    }

    u32::try_from(copies).map_err(|_| ValidationError::OutOfRange {
        field: "copies".to_string(),
        min: 1,
        max: i64::from(MAX_COPIES_PER_TRANSACTION),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_disc_id() {
        assert!(validate_disc_id("A1").is_ok());
        assert!(validate_disc_id("JAZZ-0001").is_ok());
        assert!(validate_disc_id("disc_7").is_ok());

        assert!(validate_disc_id("").is_err());
        assert!(validate_disc_id("   ").is_err());
        assert!(validate_disc_id("has space").is_err());
        assert!(validate_disc_id(&"A".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_disc_id_rejects_surrounding_whitespace() {
        for id in [" A1", "A1 ", " A1 ", "A1\t"] {
            assert!(
                matches!(
                    validate_disc_id(id),
                    Err(ValidationError::InvalidFormat { .. })
                ),
                "{id:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_names() {
        assert!(validate_title("Kind of Blue").is_ok());
        assert!(validate_artist("Miles Davis").is_ok());

        assert_eq!(
            validate_title("").unwrap_err(),
            ValidationError::Required {
                field: "title".to_string()
            }
        );
        assert_eq!(
            validate_artist(&"x".repeat(201)).unwrap_err(),
            ValidationError::TooLong {
                field: "artist".to_string(),
                max: 200
            }
        );
    }

    #[test]
    fn test_validate_names_reject_surrounding_whitespace() {
        assert!(matches!(
            validate_artist("Miles Davis "),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_title(" Kind of Blue"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_title("   "),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("sale_price", Money::zero()).is_ok());
        assert!(validate_price("sale_price", Money::from_cents(1999)).is_ok());
        assert!(validate_price("sale_price", Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_copies() {
        assert_eq!(validate_copies(1).unwrap(), 1);
        assert_eq!(validate_copies(9999).unwrap(), 9999);

        assert!(validate_copies(0).is_err());
        assert!(validate_copies(-3).is_err());
        assert!(validate_copies(10_000).is_err());
    }
}
