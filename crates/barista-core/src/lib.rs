//! # barista-core: Pure Business Logic for Barista POS
//!
//! This crate is the **heart** of the Barista POS order & pricing engine.
//! It contains all pricing logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Barista POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Frontend (cashier + back-office UI)                │   │
//! │  │    Catalog UI ──► Cart UI ──► Tender UI ──► Dashboards         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ barista-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │  pricing  │  │   │
//! │  │   │   Order   │  │   Money   │  │ effective │  │ price_cart│  │   │
//! │  │   │  LineItem │  │  TaxCalc  │  │   price   │  │ discounts │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO WALL CLOCK • PURE FUNCTIONS                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             barista-orders (Order Store Layer)                  │   │
//! │  │     lifecycle transitions, adjustments, date-scoped queries     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Order, LineItem, OrderStatus, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Effective price under time-windowed promotions
//! - [`pricing`] - Cart totals, manual discounts, change computation
//! - [`error`] - Domain error types
//! - [`validation`] - Submission-gate validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **Explicit Time**: `now` is always a parameter, never an ambient read
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Lenient Preview, Strict Gate**: live-typing input degrades safely,
//!    final submission validates hard
//!
//! ## Example Usage
//!
//! ```rust
//! use barista_core::money::Money;
//! use barista_core::pricing::{price_cart, DiscountInput};
//! use barista_core::types::LineItem;
//!
//! let cart = vec![LineItem {
//!     product_id: "latte".into(),
//!     name: "Latte".into(),
//!     category: "espresso".into(),
//!     unit_price_cents: 450,
//!     quantity: 2,
//!     variant: None,
//! }];
//!
//! let totals = price_cart(&cart, Some(&DiscountInput::percent("10").normalize()));
//! assert_eq!(totals.total(), Money::from_cents(810));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use barista_core::Money` instead of
// `use barista_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{CartTotals, DiscountInput, DiscountKind, ManualDiscount};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum items allowed in a single cart
///
/// Prevents runaway carts and ensures reasonable transaction sizes.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single item in cart
///
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
