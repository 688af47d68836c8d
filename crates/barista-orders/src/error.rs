//! # Store Error Types
//!
//! Error types for order store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (barista-core)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds NotFound / transition failures        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UI surfaces a notification and leaves the prior state displayed       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All failures are raised BEFORE any mutation; a rejected operation leaves
//! the store unchanged.

use barista_core::{OrderStatus, ValidationError};
use thiserror::Error;

/// Order store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Referenced order does not exist.
    ///
    /// ## When This Occurs
    /// - `set_status` / `cancel` on an unknown id
    /// - `get_order` miss
    ///
    /// Note: `create_adjustment` deliberately does NOT raise this; it
    /// degrades to placeholder attribution instead.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The requested lifecycle transition is not in the allowed table.
    ///
    /// ## When This Occurs
    /// - Backward moves (`Ready → Pending`)
    /// - Leaving a terminal state (`Completed → Preparing`)
    /// - Cancelling an already-completed order
    #[error("Order {id} cannot move from {from:?} to {to:?}")]
    InvalidTransition {
        id: String,
        from: OrderStatus,
        to: OrderStatus,
    },

    /// Order draft failed validation (wraps core ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
