//! # Domain Types
//!
//! Core domain types used throughout Barista POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ProductSnapshot │   │     Order       │   │    LineItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id (ORD-###)   │   │  product_id     │       │
//! │  │  price_cents    │   │  status         │   │  unit_price     │       │
//! │  │  discount win.  │   │  total_cents    │   │  quantity       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │   OrderStatus   │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Pending→...    │   │  Cash           │       │
//! │  │  825 = 8.25%    │   │  →Completed     │   │  Card           │       │
//! │  └─────────────────┘   │  Cancelled      │   │  Digital        │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Line items freeze the product's name, category, and (catalog-discounted)
//! unit price at cart-build time. Later catalog edits never rewrite history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 825 bps = 8.25% (e.g., Texas sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Product Snapshot
// =============================================================================

/// An immutable view of a catalog product, read at cart-build time.
///
/// The catalog itself (CRUD, stock management) is out of scope; the engine
/// only consumes price and promotional-discount fields from this snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductSnapshot {
    /// Catalog identifier (opaque to the engine).
    pub id: String,

    /// Display name shown to cashier and on receipt.
    pub name: String,

    /// Menu category ("espresso", "pastry", ...).
    pub category: String,

    /// List price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Current stock level.
    pub stock: i64,

    /// Whether the product can currently be sold at all.
    pub is_available: bool,

    /// Promotional discount percentage (0-100), if any.
    pub discount_percent: Option<f64>,

    /// Promotional window start; absent means unbounded on that side.
    #[ts(as = "Option<String>")]
    pub discount_starts_at: Option<DateTime<Utc>>,

    /// Promotional window end; absent means unbounded on that side.
    #[ts(as = "Option<String>")]
    pub discount_ends_at: Option<DateTime<Utc>>,
}

impl ProductSnapshot {
    /// Returns the list price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks if the product can be sold in the given quantity.
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.is_available && self.stock >= quantity
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The lifecycle status of an order.
///
/// ## Lifecycle
/// ```text
/// Pending ──► Preparing ──► Ready ──► Completed
///    │            │           │
///    └────────────┴───────────┴─────► Cancelled
/// ```
/// Forward jumps are legal (a quick takeaway sale may go straight from
/// `Pending` to `Completed`); terminal states never re-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order has been submitted and is awaiting the bar.
    Pending,
    /// The bar is working the order.
    Preparing,
    /// Drinks are on the counter, waiting for pickup.
    Ready,
    /// Picked up and paid; counts toward revenue.
    Completed,
    /// Abandoned or voided; kept in history, excluded from revenue.
    Cancelled,
}

impl OrderStatus {
    /// Checks whether this status is terminal.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Explicit allowed-transition table.
    ///
    /// Re-asserting the current status is always legal (and idempotent at
    /// the store level); everything else must move forward. Cancellation is
    /// reachable from every non-terminal state only.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;

        if *self == next {
            return true;
        }

        matches!(
            (*self, next),
            (Pending, Preparing | Ready | Completed | Cancelled)
                | (Preparing, Ready | Completed | Cancelled)
                | (Ready, Completed | Cancelled)
        )
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the order was paid. Recorded, not processed; gateway integration
/// is out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash; carries tendered/change amounts.
    Cash,
    /// Card payment on an external terminal.
    Card,
    /// Wallet/QR payment.
    Digital,
}

// =============================================================================
// Line Item
// =============================================================================

/// One product entry within an order.
///
/// `unit_price_cents` already reflects any active catalog discount
/// (see [`crate::catalog::effective_price`]); the manual discount is applied
/// later on the cart subtotal, never stacked per line.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Product ID this line was built from.
    pub product_id: String,

    /// Product name at time of sale (frozen).
    pub name: String,

    /// Category at time of sale (frozen).
    pub category: String,

    /// Unit price in cents at time of sale (frozen, catalog-discounted).
    pub unit_price_cents: i64,

    /// Quantity ordered.
    pub quantity: i64,

    /// Preparation variant, e.g. sugar level ("less sweet").
    pub variant: Option<String>,
}

impl LineItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line total in cents (unit price × quantity).
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }
}

// =============================================================================
// Order
// =============================================================================

/// The central persisted entity: a finalized checkout, an in-flight order,
/// or a negative-value adjustment ledger entry.
///
/// ## Invariants
/// - `items` non-empty (adjustments carry exactly one synthetic line)
/// - `0 <= discount_cents <= subtotal_cents`
/// - `total_cents = max(0, subtotal - discount + tax)` for normal orders;
///   `total_cents = -abs(amount)` for adjustments
/// - `completed_at` is written once, on the first completion, and never
///   cleared afterwards
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Unique human-readable identifier (`ORD-###` / `ADJ-###`).
    pub id: String,

    /// Customer name as typed at checkout.
    pub customer: String,

    /// Line items (frozen snapshots).
    pub items: Vec<LineItem>,

    /// Sum of line totals before the manual discount.
    pub subtotal_cents: i64,

    /// Manual-discount effect actually applied (post clamping).
    pub discount_cents: i64,

    /// Cashier-facing label for the discount ("10% member", ...).
    pub discount_label: Option<String>,

    /// Tax applied on the discounted subtotal.
    pub tax_cents: i64,

    /// Grand total: `max(0, subtotal - discount + tax)`.
    pub total_cents: i64,

    /// How the order was paid.
    pub payment_method: PaymentMethod,

    /// Cash only: amount tendered by the customer.
    pub paid_cents: Option<i64>,

    /// Cash only: change returned, `max(0, paid - total)`.
    pub change_cents: Option<i64>,

    /// Lifecycle status.
    pub status: OrderStatus,

    /// When the order was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the order was last touched.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,

    /// When the order first became `Completed`.
    #[ts(as = "Option<String>")]
    pub completed_at: Option<DateTime<Utc>>,

    /// Cashier who rang the order up.
    pub cashier_id: String,

    /// Cashier display name (frozen for receipts).
    pub cashier_name: String,
}

impl Order {
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

    /// Returns the tax as Money.
    #[inline]
    pub fn tax(&self) -> Money {
        Money::from_cents(self.tax_cents)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Cash only: the amount tendered, as Money.
    #[inline]
    pub fn paid(&self) -> Option<Money> {
        self.paid_cents.map(Money::from_cents)
    }

    /// Cash only: the change returned, as Money.
    #[inline]
    pub fn change(&self) -> Option<Money> {
        self.change_cents.map(Money::from_cents)
    }

    /// Checks whether this order is an adjustment ledger entry.
    ///
    /// Adjustments are the only orders with a negative total; revenue math
    /// nets them against their originals by plain summation.
    #[inline]
    pub fn is_adjustment(&self) -> bool {
        self.total_cents < 0
    }
}

// =============================================================================
// Order Draft
// =============================================================================

/// A checkout submission before the store assigns identity and timestamps.
///
/// Satisfies all [`Order`] invariants except `id` / `created_at` /
/// `updated_at`, which the store stamps on commit.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderDraft {
    pub customer: String,
    pub items: Vec<LineItem>,
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub discount_label: Option<String>,
    pub tax_cents: i64,
    pub total_cents: i64,
    pub payment_method: PaymentMethod,
    pub paid_cents: Option<i64>,
    pub change_cents: Option<i64>,
    /// Initial status, conventionally `Pending`.
    pub status: OrderStatus,
    pub cashier_id: String,
    pub cashier_name: String,
}

impl OrderDraft {
    /// Builds a draft from priced cart totals plus a caller-side tax policy.
    ///
    /// Tax is applied on the already-discounted total; the grand total keeps
    /// the same floor-at-zero rule as the cart math.
    #[allow(clippy::too_many_arguments)]
    pub fn from_cart(
        customer: impl Into<String>,
        items: Vec<LineItem>,
        totals: &pricing::CartTotals,
        tax_rate: TaxRate,
        payment_method: PaymentMethod,
        cashier_id: impl Into<String>,
        cashier_name: impl Into<String>,
    ) -> Self {
        let tax = totals.total().calculate_tax(tax_rate);
        let grand_total = (totals.total() + tax).max(Money::zero());

        OrderDraft {
            customer: customer.into(),
            items,
            subtotal_cents: totals.subtotal_cents,
            discount_cents: totals.discount_cents,
            discount_label: None,
            tax_cents: tax.cents(),
            total_cents: grand_total.cents(),
            payment_method,
            paid_cents: None,
            change_cents: None,
            status: OrderStatus::Pending,
            cashier_id: cashier_id.into(),
            cashier_name: cashier_name.into(),
        }
    }

    /// Sets the cashier-facing discount label.
    pub fn with_discount_label(mut self, label: impl Into<String>) -> Self {
        self.discount_label = Some(label.into());
        self
    }

    /// Records a cash payment, enforcing the submission boundary.
    ///
    /// This is the strict gate: a live total display tolerates under-typed
    /// amounts, but an order may only be *submitted* for cash payment when
    /// `paid >= total`.
    pub fn with_cash_payment(mut self, paid: Money) -> CoreResult<Self> {
        let total = Money::from_cents(self.total_cents);
        if paid < total {
            return Err(CoreError::InsufficientTendered {
                tendered_cents: paid.cents(),
                total_cents: total.cents(),
            });
        }

        self.payment_method = PaymentMethod::Cash;
        self.paid_cents = Some(paid.cents());
        self.change_cents = Some(pricing::change_due(paid, total).cents());
        Ok(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_items() -> Vec<LineItem> {
        vec![
            LineItem {
                product_id: "latte".to_string(),
                name: "Latte".to_string(),
                category: "espresso".to_string(),
                unit_price_cents: 450,
                quantity: 2,
                variant: None,
            },
            LineItem {
                product_id: "croissant".to_string(),
                name: "Butter Croissant".to_string(),
                category: "pastry".to_string(),
                unit_price_cents: 325,
                quantity: 1,
                variant: None,
            },
        ]
    }

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(825);
        assert_eq!(rate.bps(), 825);
        assert!((rate.percentage() - 8.25).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(8.25);
        assert_eq!(rate.bps(), 825);
    }

    #[test]
    fn test_order_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_status_forward_transitions() {
        use OrderStatus::*;
        assert!(Pending.can_transition_to(Preparing));
        assert!(Pending.can_transition_to(Completed)); // quick takeaway sale
        assert!(Preparing.can_transition_to(Ready));
        assert!(Ready.can_transition_to(Completed));
    }

    #[test]
    fn test_status_cancellation_reachability() {
        use OrderStatus::*;
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Preparing.can_transition_to(Cancelled));
        assert!(Ready.can_transition_to(Cancelled));
        // Hardened: completed orders can no longer be cancelled server-side
        assert!(!Completed.can_transition_to(Cancelled));
    }

    #[test]
    fn test_status_backward_transitions_rejected() {
        use OrderStatus::*;
        assert!(!Preparing.can_transition_to(Pending));
        assert!(!Ready.can_transition_to(Preparing));
        assert!(!Completed.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Pending));
    }

    #[test]
    fn test_status_reassertion_is_legal() {
        use OrderStatus::*;
        assert!(Completed.can_transition_to(Completed));
        assert!(Pending.can_transition_to(Pending));
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&OrderStatus::Preparing).unwrap();
        assert_eq!(json, "\"preparing\"");
        let method = serde_json::to_string(&PaymentMethod::Digital).unwrap();
        assert_eq!(method, "\"digital\"");
    }

    #[test]
    fn test_line_total() {
        let item = &test_items()[0];
        assert_eq!(item.line_total_cents(), 900);
        assert_eq!(item.line_total(), Money::from_cents(900));
    }

    #[test]
    fn test_product_can_sell() {
        let product = ProductSnapshot {
            id: "latte".to_string(),
            name: "Latte".to_string(),
            category: "espresso".to_string(),
            price_cents: 450,
            stock: 3,
            is_available: true,
            discount_percent: None,
            discount_starts_at: None,
            discount_ends_at: None,
        };
        assert!(product.can_sell(3));
        assert!(!product.can_sell(4));
    }

    #[test]
    fn test_draft_from_cart_applies_tax_on_discounted_total() {
        let items = test_items();
        let totals = pricing::price_cart(&items, None);
        let draft = OrderDraft::from_cart(
            "Alex",
            items,
            &totals,
            TaxRate::from_bps(1000), // 10%
            PaymentMethod::Card,
            "c-01",
            "Sam",
        );

        assert_eq!(draft.subtotal_cents, 1225);
        assert_eq!(draft.discount_cents, 0);
        assert_eq!(draft.tax_cents, 123); // 10% of $12.25, rounded
        assert_eq!(draft.total_cents, 1348);
        assert_eq!(draft.status, OrderStatus::Pending);
    }

    #[test]
    fn test_cash_payment_gate() {
        // total $17.32, tendered $20.00, change $2.68
        let items = vec![LineItem {
            product_id: "p".to_string(),
            name: "P".to_string(),
            category: "c".to_string(),
            unit_price_cents: 1732,
            quantity: 1,
            variant: None,
        }];
        let totals = pricing::price_cart(&items, None);
        let draft = OrderDraft::from_cart(
            "Alex",
            items,
            &totals,
            TaxRate::zero(),
            PaymentMethod::Cash,
            "c-01",
            "Sam",
        );

        let paid = draft.clone().with_cash_payment(Money::from_cents(2000)).unwrap();
        assert_eq!(paid.paid_cents, Some(2000));
        assert_eq!(paid.change_cents, Some(268));

        // $10.00 tendered against $17.32 must be rejected at the boundary
        let under = draft.with_cash_payment(Money::from_cents(1000));
        assert!(matches!(
            under,
            Err(CoreError::InsufficientTendered {
                tendered_cents: 1000,
                total_cents: 1732
            })
        ));
    }

    #[test]
    fn test_is_adjustment() {
        let items = test_items();
        let totals = pricing::price_cart(&items, None);
        let draft = OrderDraft::from_cart(
            "Alex",
            items,
            &totals,
            TaxRate::zero(),
            PaymentMethod::Card,
            "c-01",
            "Sam",
        );
        let order = Order {
            id: "ORD-001".to_string(),
            customer: draft.customer,
            items: draft.items,
            subtotal_cents: draft.subtotal_cents,
            discount_cents: draft.discount_cents,
            discount_label: None,
            tax_cents: draft.tax_cents,
            total_cents: draft.total_cents,
            payment_method: draft.payment_method,
            paid_cents: None,
            change_cents: None,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            completed_at: None,
            cashier_id: draft.cashier_id,
            cashier_name: draft.cashier_name,
        };
        assert!(!order.is_adjustment());

        let mut adjustment = order.clone();
        adjustment.total_cents = -500;
        assert!(adjustment.is_adjustment());
    }
}
