//! # Error Types
//!
//! Domain-specific error types for barista-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  barista-core errors (this file)                                       │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  barista-orders errors (separate crate)                                │
//! │  └── StoreError       - Order store failures (NotFound, transitions)   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → UI notification      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (order id, amounts, etc.)
//! 3. Errors are enum variants, never String
//! 4. Malformed *live-typing* input is NOT an error: the lenient discount
//!    parse degrades to a zero discount instead (see [`crate::pricing`]).
//!    Only the final submission gate produces errors from this module.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations raised at the checkout
/// submission boundary. They should be caught and translated to
/// user-friendly messages by the UI layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Cash tendered is less than the amount due.
    ///
    /// ## When This Occurs
    /// - Cashier submits a cash payment with `paid < total`
    ///
    /// The lenient live-preview path never raises this; only the final
    /// submission gate does.
    #[error("Cash tendered {tendered_cents} is less than total {total_cents}")]
    InsufficientTendered { tendered_cents: i64, total_cents: i64 },

    /// Cart has exceeded maximum allowed items.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Item quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before an order draft touches the store.
#[derive(Debug, Error)]
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

    /// Invalid format (e.g., a discount value that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
