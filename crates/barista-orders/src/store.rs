//! # Order Store
//!
//! The authoritative in-memory collection of orders, plus the lifecycle
//! state machine and the adjustment/refund generator that write into it.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Lifecycle                                   │
//! │                                                                         │
//! │  1. CREATE                                                             │
//! │     └── create_order(draft, now) → Order { status: Pending }           │
//! │                                                                         │
//! │  2. WORK THE ORDER                                                     │
//! │     └── set_status(id, Preparing, now)                                 │
//! │     └── set_status(id, Ready, now)                                     │
//! │                                                                         │
//! │  3. COMPLETE                                                           │
//! │     └── set_status(id, Completed, now) → stamps completed_at once      │
//! │                                                                         │
//! │  4. (OPTIONAL) CANCEL from any non-terminal state                       │
//! │     └── cancel(id, now) → Order { status: Cancelled }                  │
//! │                                                                         │
//! │  5. (OPTIONAL) REFUND, any time after creation                          │
//! │     └── create_adjustment(id, amount, now) → parallel ADJ- entry       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency Model
//! Single logical writer: mutations happen in response to discrete cashier
//! actions. Reads clone a snapshot under a short read lock; the internal
//! collection is never exposed by reference, so dashboard queries issued
//! concurrently with a write always see a consistent state.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, TimeZone, Utc};
use tracing::{debug, info, warn};

use barista_core::{
    validation, LineItem, Money, Order, OrderDraft, OrderStatus, PaymentMethod, ValidationError,
};

use crate::error::{StoreError, StoreResult};
use crate::ids::IdAllocator;
use crate::query::{self, DateFilter, OrderStats};

/// Attribution fallbacks for adjustments whose original order is gone.
const FALLBACK_CUSTOMER: &str = "Adjustment";
const FALLBACK_CASHIER_ID: &str = "unknown";
const FALLBACK_CASHIER_NAME: &str = "Unknown Cashier";

// =============================================================================
// Order Store
// =============================================================================

/// Everything behind the lock: the order ledger and its identifier counter.
///
/// The counter lives here (not derived from `orders.len()`) so identifiers
/// stay unique even if compaction is ever introduced.
#[derive(Debug)]
struct Ledger {
    /// Orders, most recent first.
    orders: Vec<Order>,
    ids: IdAllocator,
}

/// The single source of truth for orders.
///
/// Instantiate one per terminal/process and inject it where needed; there
/// is no ambient global instance.
#[derive(Debug)]
pub struct OrderStore {
    inner: RwLock<Ledger>,
}

impl OrderStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        OrderStore {
            inner: RwLock::new(Ledger {
                orders: Vec::new(),
                ids: IdAllocator::new(),
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Ledger> {
        self.inner.read().expect("order store lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Ledger> {
        self.inner.write().expect("order store lock poisoned")
    }

    // =========================================================================
    // Creation
    // =========================================================================

    /// Commits a checkout draft as a new order.
    ///
    /// Validates the draft first (non-empty items, positive quantities,
    /// discount within `[0, subtotal]`); a rejected draft leaves the store
    /// unchanged. On success the order is stamped with a fresh `ORD-###`
    /// identifier and `created_at = updated_at = now`, and is inserted at
    /// the head of the collection (most-recent-first read order).
    pub fn create_order(&self, draft: OrderDraft, now: DateTime<Utc>) -> StoreResult<String> {
        validation::validate_line_items(&draft.items)?;

        if draft.discount_cents < 0 || draft.discount_cents > draft.subtotal_cents {
            return Err(ValidationError::OutOfRange {
                field: "discount".to_string(),
                min: 0,
                max: draft.subtotal_cents,
            }
            .into());
        }

        let mut ledger = self.write();
        let id = ledger.ids.next_order_id();

        let order = Order {
            id: id.clone(),
            customer: draft.customer,
            items: draft.items,
            subtotal_cents: draft.subtotal_cents,
            discount_cents: draft.discount_cents,
            discount_label: draft.discount_label,
            tax_cents: draft.tax_cents,
            total_cents: draft.total_cents,
            payment_method: draft.payment_method,
            paid_cents: draft.paid_cents,
            change_cents: draft.change_cents,
            status: draft.status,
            created_at: now,
            updated_at: now,
            completed_at: None,
            cashier_id: draft.cashier_id,
            cashier_name: draft.cashier_name,
        };

        info!(
            order_id = %id,
            total = %order.total(),
            items = order.items.len(),
            "Order created"
        );

        ledger.orders.insert(0, order);
        Ok(id)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Gets an order by ID (cloned snapshot).
    pub fn get_order(&self, id: &str) -> StoreResult<Order> {
        self.read()
            .orders
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Order", id))
    }

    /// Returns a snapshot of all orders, most recent first.
    ///
    /// The snapshot reflects the committed state at call time and is not a
    /// live cursor; later writes never show through it.
    pub fn list_orders(&self) -> Vec<Order> {
        self.read().orders.clone()
    }

    /// Number of orders ever stored (nothing is ever deleted).
    pub fn order_count(&self) -> usize {
        self.read().orders.len()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Transitions an order to a new lifecycle status.
    ///
    /// Fails with `NotFound` for an unknown id, and with
    /// `InvalidTransition` when the move is not in the allowed table
    /// (backward moves, leaving a terminal state). Both fail before mutation.
    /// `updated_at` is stamped on every accepted transition; `completed_at`
    /// is stamped only by the FIRST transition into `Completed` and is
    /// never reset by a re-completion.
    pub fn set_status(
        &self,
        id: &str,
        new_status: OrderStatus,
        now: DateTime<Utc>,
    ) -> StoreResult<()> {
        let mut ledger = self.write();
        let order = ledger
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::not_found("Order", id))?;

        if !order.status.can_transition_to(new_status) {
            return Err(StoreError::InvalidTransition {
                id: id.to_string(),
                from: order.status,
                to: new_status,
            });
        }

        debug!(order_id = %id, from = ?order.status, to = ?new_status, "Status transition");

        order.status = new_status;
        order.updated_at = now;
        if new_status == OrderStatus::Completed && order.completed_at.is_none() {
            order.completed_at = Some(now);
        }

        Ok(())
    }

    /// Cancels an order: `set_status(id, Cancelled, now)`.
    ///
    /// Cancellation is a status, not a removal; the order stays in history
    /// and in date-scoped counts. Completed orders cannot be cancelled;
    /// issue an adjustment instead.
    pub fn cancel(&self, id: &str, now: DateTime<Utc>) -> StoreResult<()> {
        self.set_status(id, OrderStatus::Cancelled, now)
    }

    // =========================================================================
    // Adjustments
    // =========================================================================

    /// Creates a negative-value adjustment order referencing an original.
    ///
    /// The stored effect is always `-abs(amount)` regardless of the sign
    /// passed. Customer, payment method, and cashier attribution are
    /// inherited from the original order when it can be found, and degrade
    /// to placeholders when it cannot; an unresolvable id is NOT an error.
    /// The adjustment is committed `Completed` immediately so it nets
    /// against revenue in the period it was issued; the original order is
    /// left untouched.
    pub fn create_adjustment(
        &self,
        original_order_id: &str,
        amount: Money,
        now: DateTime<Utc>,
    ) -> String {
        let mut ledger = self.write();

        let effect = amount.abs().neg();

        let original = ledger
            .orders
            .iter()
            .find(|o| o.id == original_order_id)
            .cloned();
        if original.is_none() {
            warn!(
                original_order_id = %original_order_id,
                "Adjustment references unknown order; using placeholder attribution"
            );
        }

        let (customer, payment_method, cashier_id, cashier_name) = match &original {
            Some(o) => (
                o.customer.clone(),
                o.payment_method,
                o.cashier_id.clone(),
                o.cashier_name.clone(),
            ),
            None => (
                FALLBACK_CUSTOMER.to_string(),
                PaymentMethod::Card,
                FALLBACK_CASHIER_ID.to_string(),
                FALLBACK_CASHIER_NAME.to_string(),
            ),
        };

        let id = ledger.ids.next_adjustment_id();

        let adjustment = Order {
            id: id.clone(),
            customer,
            items: vec![LineItem {
                product_id: original_order_id.to_string(),
                name: format!("Adjustment for {original_order_id}"),
                category: "adjustment".to_string(),
                unit_price_cents: effect.cents(),
                quantity: 1,
                variant: None,
            }],
            subtotal_cents: effect.cents(),
            discount_cents: 0,
            discount_label: None,
            tax_cents: 0,
            total_cents: effect.cents(),
            payment_method,
            paid_cents: None,
            change_cents: None,
            status: OrderStatus::Completed,
            created_at: now,
            updated_at: now,
            completed_at: Some(now),
            cashier_id,
            cashier_name,
        };

        info!(
            adjustment_id = %id,
            original_order_id = %original_order_id,
            effect = %effect,
            "Adjustment created"
        );

        ledger.orders.insert(0, adjustment);
        id
    }

    // =========================================================================
    // Date-Scoped Queries
    // =========================================================================

    /// Orders whose `created_at` falls in the given window, most recent
    /// first. Range bounds are computed in the reference instant's own
    /// timezone (dashboards pass `Local`, tests pass `Utc`).
    pub fn orders_in_range<Tz: TimeZone>(
        &self,
        filter: DateFilter,
        reference: &DateTime<Tz>,
    ) -> Vec<Order> {
        let ledger = self.read();
        query::select_range(&ledger.orders, filter, reference)
    }

    /// Completed revenue in the window (adjustments included; they are
    /// committed `Completed` and net against their originals by summation).
    pub fn revenue_in_range<Tz: TimeZone>(
        &self,
        filter: DateFilter,
        reference: &DateTime<Tz>,
    ) -> Money {
        let ledger = self.read();
        query::revenue_for(&query::select_range(&ledger.orders, filter, reference))
    }

    /// Dashboard stats for the window: per-status counts plus revenue,
    /// all derived from one snapshot (no torn reads between count and
    /// revenue).
    pub fn stats_in_range<Tz: TimeZone>(
        &self,
        filter: DateFilter,
        reference: &DateTime<Tz>,
    ) -> OrderStats {
        let ledger = self.read();
        query::stats_for(&query::select_range(&ledger.orders, filter, reference))
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
