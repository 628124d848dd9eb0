//! # Error Types
//!
//! Domain-specific error types for craftsense-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  craftsense-core errors (this file)                                    │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  craftsense-storage errors (separate crate)                            │
//! │  └── StorageError     - Durable storage failures (never surfaced       │
//! │                         from store mutations, only logged)             │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── AppError         - What the user sees                             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → stderr + exit code     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Missing cart items and missing registrations are NOT errors: removing
//! or updating an absent id is a defined no-op.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product does not exist in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Workshop does not exist in the catalog.
    #[error("Workshop not found: {0}")]
    WorkshopNotFound(String),

    /// Forum post does not exist on the board.
    ///
    /// ## When This Occurs
    /// - Commenting on or liking a post id that was never created
    #[error("Post not found: {0}")]
    PostNotFound(String),

    /// Adding to an existing line would push it past the quantity limit.
    #[error("Quantity for {id} would exceed {max} (current {current}, adding {added})")]
    QuantityOverflow {
        id: String,
        current: i64,
        added: i64,
        max: i64,
    },

    /// Catalog JSON could not be parsed.
    #[error("Invalid catalog data: {0}")]
    InvalidCatalog(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any state changes, so a rejected operation leaves the
/// cart/registrations/board exactly as they were.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank.
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

    /// One value may not exceed another (e.g. artisan share vs. price).
    #[error("{field} ({value}) cannot exceed {limit_field} ({limit})")]
    Exceeds {
        field: String,
        value: i64,
        limit_field: String,
        limit: i64,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
