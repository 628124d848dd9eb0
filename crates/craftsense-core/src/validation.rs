//! # Validation Module
//!
//! Input validation for the cart, registrations, and forum.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end                                                    │
//! │  ├── Argument parsing (types, required flags)                          │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (called by the reducers before mutating)         │
//! │  ├── Non-negative prices, share within price                           │
//! │  ├── Quantity >= 1 on add                                              │
//! │  └── Non-blank ids, names, post text                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Reducer invariants                                           │
//! │  └── Unique ids, quantity > 0 after every operation                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use craftsense_core::money::Money;
//! use craftsense_core::validation::{validate_artisan_share, validate_quantity};
//!
//! validate_quantity(1).unwrap();
//! validate_artisan_share(Money::new(90), Money::new(100)).unwrap();
//! assert!(validate_artisan_share(Money::new(120), Money::new(100)).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::{Money, ShareRate};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted identifier (product, workshop, post ids).
pub const MAX_ID_LEN: usize = 100;

/// Longest accepted display name or title.
pub const MAX_NAME_LEN: usize = 200;

/// Longest accepted forum post or comment body.
pub const MAX_BODY_LEN: usize = 5000;

/// Longest accepted search query.
pub const MAX_QUERY_LEN: usize = 100;

/// Largest quantity a single cart line may hold.
pub const MAX_QUANTITY: i64 = 10_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an entity identifier.
///
/// ## Rules
/// - Must not be blank
/// - At most 100 characters
pub fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if id.chars().count() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a display name or title.
///
/// ## Example
/// ```rust
/// use craftsense_core::validation::validate_name;
///
/// assert!(validate_name("name", "Madhubani Painting").is_ok());
/// assert!(validate_name("name", "   ").is_err());
/// ```
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    validate_text(field, name, MAX_NAME_LEN)
}

/// Validates free text (post content, comment body).
pub fn validate_body(field: &str, body: &str) -> ValidationResult<()> {
    validate_text(field, body, MAX_BODY_LEN)
}

fn validate_text(field: &str, text: &str, max: usize) -> ValidationResult<()> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if text.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches everything)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart line quantity.
///
/// ## Rules
/// - At least 1
/// - At most [`MAX_QUANTITY`]
///
/// Updates to zero or below are a removal, so callers only check the
/// positive case there.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items, free workshops)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates the artisan's portion of a price.
///
/// ## Rules
/// - 0 <= share <= price
pub fn validate_artisan_share(share: Money, price: Money) -> ValidationResult<()> {
    if share.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "artisanShare".to_string(),
            min: 0,
            max: price.units(),
        });
    }

    if share > price {
        return Err(ValidationError::Exceeds {
            field: "artisanShare".to_string(),
            value: share.units(),
            limit_field: "price".to_string(),
            limit: price.units(),
        });
    }

    Ok(())
}

/// Validates a share rate in basis points (0% to 100%).
pub fn validate_share_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > ShareRate::FULL.bps() {
        return Err(ValidationError::OutOfRange {
            field: "artisan_share_bps".to_string(),
            min: 0,
            max: i64::from(ShareRate::FULL.bps()),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id() {
        assert!(validate_id("id", "p1").is_ok());
        assert!(validate_id("id", "").is_err());
        assert!(validate_id("id", "   ").is_err());
        assert!(validate_id("id", &"x".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("name", "Terracotta Vase").is_ok());
        assert_eq!(
            validate_name("title", "\t\n"),
            Err(ValidationError::Required {
                field: "title".to_string()
            })
        );
        assert!(validate_name("name", &"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1000).is_ok());
        assert!(validate_quantity(MAX_QUANTITY).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
        assert_eq!(
            validate_quantity(MAX_QUANTITY + 1),
            Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 1,
                max: MAX_QUANTITY
            })
        );
        assert!(validate_quantity(i64::MAX).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::new(1500)).is_ok());
        assert!(validate_price(Money::new(-1)).is_err());
    }

    #[test]
    fn test_validate_artisan_share() {
        assert!(validate_artisan_share(Money::new(90), Money::new(100)).is_ok());
        assert!(validate_artisan_share(Money::new(100), Money::new(100)).is_ok());
        assert!(validate_artisan_share(Money::zero(), Money::zero()).is_ok());
        assert!(validate_artisan_share(Money::new(-1), Money::new(100)).is_err());
        assert!(matches!(
            validate_artisan_share(Money::new(101), Money::new(100)),
            Err(ValidationError::Exceeds { .. })
        ));
    }

    #[test]
    fn test_validate_share_rate_bps() {
        assert!(validate_share_rate_bps(0).is_ok());
        assert!(validate_share_rate_bps(9000).is_ok());
        assert!(validate_share_rate_bps(10_000).is_ok());
        assert!(validate_share_rate_bps(10_001).is_err());
    }

    #[test]
    fn test_validate_search_query_trims() {
        assert_eq!(validate_search_query("  silk ").unwrap(), "silk");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"q".repeat(101)).is_err());
    }
}
