//! # Cart Pricing Calculator
//!
//! Computes subtotal, effective manual discount, and total for a set of
//! line items, with clamping rules that keep a live total display safe.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Pricing Pipeline                              │
//! │                                                                         │
//! │  LineItems (unit prices already catalog-discounted, §catalog)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  subtotal = Σ unit_price × quantity                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DiscountInput::normalize()  ← lenient: bad input degrades to zero     │
//! │       │    percent clamped to [0, 100], amount clamped to >= 0         │
//! │       ▼                                                                 │
//! │  discount = min(subtotal, raw discount)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  total = max(0, subtotal - discount)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  caller applies tax with the same floor-at-zero rule                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Lenient?
//! This math runs on every keystroke of the checkout screen. Malformed
//! numeric input degrades to a zero discount instead of erroring; the
//! strict parse lives in [`crate::validation`] and runs once, at
//! submission.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::LineItem;

// =============================================================================
// Manual Discount
// =============================================================================

/// The kind of cashier-entered discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    /// Percentage of the subtotal, 0-100.
    Percent,
    /// Flat amount off the subtotal.
    Amount,
}

/// Raw manual-discount specification as typed by the cashier.
///
/// `value` is kept as the raw string so the live preview can re-normalize
/// on every keystroke without the UI pre-parsing anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountInput {
    pub kind: DiscountKind,
    pub value: String,
}

impl DiscountInput {
    /// Creates a percent-kind input.
    pub fn percent(value: impl Into<String>) -> Self {
        DiscountInput {
            kind: DiscountKind::Percent,
            value: value.into(),
        }
    }

    /// Creates an amount-kind input.
    pub fn amount(value: impl Into<String>) -> Self {
        DiscountInput {
            kind: DiscountKind::Amount,
            value: value.into(),
        }
    }

    /// Lenient normalization for the live total display.
    ///
    /// Parse failures become a zero discount; percent values clamp to
    /// `[0, 100]`; amounts clamp to `>= 0`. Never errors.
    pub fn normalize(&self) -> ManualDiscount {
        match self.kind {
            DiscountKind::Percent => {
                let percent: f64 = self.value.trim().parse().unwrap_or(0.0);
                let percent = if percent.is_finite() { percent } else { 0.0 };
                let bps = (percent.clamp(0.0, 100.0) * 100.0).round() as u32;
                ManualDiscount::Percent { bps }
            }
            DiscountKind::Amount => {
                let amount = Money::parse_decimal(&self.value)
                    .unwrap_or_else(Money::zero)
                    .max(Money::zero());
                ManualDiscount::Amount { amount }
            }
        }
    }
}

/// A normalized manual discount, safe to price with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ManualDiscount {
    /// Percentage in clamped basis points (0..=10000).
    Percent { bps: u32 },
    /// Non-negative flat amount (no implicit upper bound at this stage;
    /// the subtotal cap is applied during pricing).
    Amount { amount: Money },
}

impl ManualDiscount {
    /// Raw discount before the subtotal cap.
    fn raw_amount(&self, subtotal: Money) -> Money {
        match self {
            ManualDiscount::Percent { bps } => subtotal.percentage_amount(*bps),
            ManualDiscount::Amount { amount } => *amount,
        }
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Result of pricing a cart: subtotal, applied discount, and total,
/// all pre-tax. Tax is the caller's policy (see
/// [`crate::types::OrderDraft::from_cart`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartTotals {
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
}

impl CartTotals {
    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Returns the applied discount as Money.
    #[inline]
    pub fn discount(&self) -> Money {
        Money::from_cents(self.discount_cents)
    }

    /// Returns the pre-tax total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Pricing
// =============================================================================

/// Prices a cart: `subtotal = Σ line totals`, manual discount capped at the
/// subtotal, total floored at zero.
///
/// Unit prices are expected to already reflect any active catalog discount;
/// catalog and manual discounts never stack multiplicatively.
///
/// ## Example
/// ```rust
/// use barista_core::pricing::{price_cart, DiscountInput};
/// use barista_core::types::LineItem;
///
/// let items = vec![LineItem {
///     product_id: "latte".into(),
///     name: "Latte".into(),
///     category: "espresso".into(),
///     unit_price_cents: 450,
///     quantity: 2,
///     variant: None,
/// }];
///
/// let totals = price_cart(&items, Some(&DiscountInput::percent("10").normalize()));
/// assert_eq!(totals.subtotal_cents, 900);
/// assert_eq!(totals.discount_cents, 90);
/// assert_eq!(totals.total_cents, 810);
/// ```
pub fn price_cart(items: &[LineItem], discount: Option<&ManualDiscount>) -> CartTotals {
    let subtotal: Money = items.iter().map(LineItem::line_total).sum();

    let raw = discount
        .map(|d| d.raw_amount(subtotal))
        .unwrap_or_else(Money::zero);

    // 0 <= discount <= subtotal, whatever the input was
    let discount = raw.max(Money::zero()).min(subtotal.max(Money::zero()));
    let total = (subtotal - discount).max(Money::zero());

    CartTotals {
        subtotal_cents: subtotal.cents(),
        discount_cents: discount.cents(),
        total_cents: total.cents(),
    }
}

/// Change due on a cash payment: `max(0, paid - total)`.
///
/// The "paid must cover the total" rule is enforced at the submission
/// boundary ([`crate::types::OrderDraft::with_cash_payment`]), not here;
/// this stays total-safe for live display while the cashier types.
#[inline]
pub fn change_due(paid: Money, total: Money) -> Money {
    (paid - total).max(Money::zero())
}

// =============================================================================
// Unit Tests
// =============================================================================
