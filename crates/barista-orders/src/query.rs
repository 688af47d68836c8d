//! # Date-Scoped Query Engine
//!
//! Pure read functions behind every dashboard view: select orders in a
//! relative time window, sum completed revenue, derive per-status counts.
//!
//! ## Window Anchoring
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │             DateFilter windows around a reference instant               │
//! │                                                                         │
//! │  Day    [ref@00:00:00.000 ──────────────────── ref@23:59:59.999]       │
//! │  Week   [Sunday 00:00:00.000 ──── (6 days) ──── Saturday 23:59:59.999] │
//! │  Month  [day 1 00:00:00.000 ──────────── last day 23:59:59.999]        │
//! │  All    (no bounds)                                                     │
//! │                                                                         │
//! │  Bounds are computed in the reference instant's OWN timezone, then     │
//! │  compared against order.created_at in UTC. Inclusive on both ends.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All functions take the order slice by reference so the store can apply
//! them under a single read lock: counts and revenue derived from one
//! snapshot never disagree with each other.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use barista_core::{Money, Order, OrderStatus};

// =============================================================================
// Filter & Stats Types
// =============================================================================

/// Relative time window for dashboard queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFilter {
    /// The reference instant's calendar day.
    Day,
    /// The Sunday-anchored week containing the reference instant.
    Week,
    /// The calendar month containing the reference instant.
    Month,
    /// No filtering.
    All,
}

/// Aggregate order statistics for one window.
///
/// The five status counts partition `total`; `revenue` sums only
/// `Completed` orders (which includes adjustments, so refunds net out).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub preparing: usize,
    pub ready: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub revenue_cents: i64,
}

impl OrderStats {
    /// Completed revenue as money.
    pub fn revenue(&self) -> Money {
        Money::from_cents(self.revenue_cents)
    }
}

// =============================================================================
// Range Computation
// =============================================================================

/// Resolves a local date+time to a UTC instant.
///
/// DST folds pick the earlier mapping; a gapped (nonexistent) local time
/// falls back to the reference instant itself, which is always inside the
/// window being built around it.
fn localize<Tz: TimeZone>(
    tz: &Tz,
    date: NaiveDate,
    time: NaiveTime,
    fallback: &DateTime<Tz>,
) -> DateTime<Utc> {
    match tz.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earlier, _) => earlier.with_timezone(&Utc),
        LocalResult::None => fallback.with_timezone(&Utc),
    }
}

/// Computes the inclusive `[start, end]` UTC bounds for a filter around a
/// reference instant, in the instant's own timezone. `All` has no bounds.
pub fn range_for<Tz: TimeZone>(
    filter: DateFilter,
    reference: &DateTime<Tz>,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let tz = reference.timezone();
    let today = reference.date_naive();

    let day_start = NaiveTime::from_hms_opt(0, 0, 0).expect("midnight is valid");
    let day_end = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("end of day is valid");

    let (first_day, last_day) = match filter {
        DateFilter::Day => (today, today),
        DateFilter::Week => {
            let sunday = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
            (sunday, sunday + Duration::days(6))
        }
        DateFilter::Month => {
            let first = today.with_day(1).expect("day 1 exists in every month");
            let next_month = if first.month() == 12 {
                NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
            }
            .expect("first of next month is valid");
            (first, next_month - Duration::days(1))
        }
        DateFilter::All => return None,
    };

    Some((
        localize(&tz, first_day, day_start, reference),
        localize(&tz, last_day, day_end, reference),
    ))
}

// =============================================================================
// Selection & Aggregation
// =============================================================================

/// Orders whose `created_at` falls inside the window, preserving the input
/// order (most recent first when fed from the store).
pub fn select_range<Tz: TimeZone>(
    orders: &[Order],
    filter: DateFilter,
    reference: &DateTime<Tz>,
) -> Vec<Order> {
    match range_for(filter, reference) {
        None => orders.to_vec(),
        Some((start, end)) => orders
            .iter()
            .filter(|o| o.created_at >= start && o.created_at <= end)
            .cloned()
            .collect(),
    }
}

/// Sum of `total` over `Completed` orders only.
///
/// Adjustments are committed `Completed`, so a refund in the window nets
/// against its original by summation.
pub fn revenue_for(orders: &[Order]) -> Money {
    orders
        .iter()
        .filter(|o| o.status == OrderStatus::Completed)
        .map(|o| o.total())
        .sum()
}

/// Per-status counts plus completed revenue for one set of orders.
pub fn stats_for(orders: &[Order]) -> OrderStats {
    let mut stats = OrderStats {
        total: orders.len(),
        pending: 0,
        preparing: 0,
        ready: 0,
        completed: 0,
        cancelled: 0,
        revenue_cents: 0,
    };

    for order in orders {
        match order.status {
            OrderStatus::Pending => stats.pending += 1,
            OrderStatus::Preparing => stats.preparing += 1,
            OrderStatus::Ready => stats.ready += 1,
            OrderStatus::Completed => {
                stats.completed += 1;
                stats.revenue_cents += order.total_cents;
            }
            OrderStatus::Cancelled => stats.cancelled += 1,
        }
    }

    stats
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use barista_core::{LineItem, PaymentMethod};

    fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    fn order_at(id: &str, status: OrderStatus, total_cents: i64, created_at: DateTime<Utc>) -> Order {
        Order {
            id: id.to_string(),
            customer: "Alex".to_string(),
            items: vec![LineItem {
                product_id: "latte".to_string(),
                name: "Latte".to_string(),
                category: "espresso".to_string(),
                unit_price_cents: total_cents,
                quantity: 1,
                variant: None,
            }],
            subtotal_cents: total_cents,
            discount_cents: 0,
            discount_label: None,
            tax_cents: 0,
            total_cents,
            payment_method: PaymentMethod::Card,
            paid_cents: None,
            change_cents: None,
            status,
            created_at,
            updated_at: created_at,
            completed_at: None,
            cashier_id: "c-01".to_string(),
            cashier_name: "Sam".to_string(),
        }
    }

    #[test]
    fn test_day_range_is_inclusive_at_both_ends() {
        // An order stamped 23:59:59.999 still belongs to that day
        let reference = ts(2024, 3, 10, 12, 0);
        let (start, end) = range_for(DateFilter::Day, &reference).unwrap();

        assert_eq!(start, ts(2024, 3, 10, 0, 0));
        assert_eq!(
            end,
            Utc.with_ymd_and_hms(2024, 3, 10, 23, 59, 59)
                .unwrap()
                .checked_add_signed(Duration::milliseconds(999))
                .unwrap()
        );

        let orders = vec![
            order_at("ORD-001", OrderStatus::Completed, 500, start),
            order_at("ORD-002", OrderStatus::Completed, 500, end),
            order_at(
                "ORD-003",
                OrderStatus::Completed,
                500,
                end + Duration::milliseconds(1),
            ),
        ];
        let selected = select_range(&orders, DateFilter::Day, &reference);
        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|o| o.id != "ORD-003"));
    }

    #[test]
    fn test_week_anchors_on_sunday() {
        // 2024-03-13 is a Wednesday; its week runs Sun 03-10 .. Sat 03-16
        let reference = ts(2024, 3, 13, 9, 0);
        let (start, end) = range_for(DateFilter::Week, &reference).unwrap();

        assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(end.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
    }

    #[test]
    fn test_week_of_a_sunday_starts_that_day() {
        let reference = ts(2024, 3, 10, 9, 0); // a Sunday
        let (start, _) = range_for(DateFilter::Week, &reference).unwrap();
        assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }

    #[test]
    fn test_month_range_covers_whole_calendar_month() {
        let reference = ts(2024, 2, 14, 9, 0); // leap February
        let (start, end) = range_for(DateFilter::Month, &reference).unwrap();

        assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(end.date_naive(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_december_month_range() {
        let reference = ts(2024, 12, 5, 9, 0);
        let (_, end) = range_for(DateFilter::Month, &reference).unwrap();
        assert_eq!(end.date_naive(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn test_all_filter_has_no_bounds() {
        let reference = ts(2024, 3, 10, 12, 0);
        assert!(range_for(DateFilter::All, &reference).is_none());

        let orders = vec![
            order_at("ORD-001", OrderStatus::Pending, 500, ts(1999, 1, 1, 0, 0)),
            order_at("ORD-002", OrderStatus::Pending, 500, ts(2050, 1, 1, 0, 0)),
        ];
        assert_eq!(select_range(&orders, DateFilter::All, &reference).len(), 2);
    }

    #[test]
    fn test_revenue_counts_completed_only() {
        let day = ts(2024, 3, 10, 10, 0);
        let orders = vec![
            order_at("ORD-001", OrderStatus::Completed, 1000, day),
            order_at("ORD-002", OrderStatus::Pending, 2000, day),
            order_at("ORD-003", OrderStatus::Ready, 3000, day),
            order_at("ORD-004", OrderStatus::Cancelled, 4000, day),
        ];

        assert_eq!(revenue_for(&orders), Money::from_cents(1000));
    }

    #[test]
    fn test_revenue_nets_adjustments() {
        let day = ts(2024, 3, 10, 10, 0);
        let orders = vec![
            order_at("ORD-001", OrderStatus::Completed, 1500, day),
            order_at("ADJ-002", OrderStatus::Completed, -500, day),
        ];

        assert_eq!(revenue_for(&orders), Money::from_cents(1000));
    }

    #[test]
    fn test_stats_partition_the_total() {
        let day = ts(2024, 3, 10, 10, 0);
        let orders = vec![
            order_at("ORD-001", OrderStatus::Pending, 100, day),
            order_at("ORD-002", OrderStatus::Preparing, 200, day),
            order_at("ORD-003", OrderStatus::Ready, 300, day),
            order_at("ORD-004", OrderStatus::Completed, 400, day),
            order_at("ORD-005", OrderStatus::Completed, 600, day),
            order_at("ORD-006", OrderStatus::Cancelled, 700, day),
        ];

        let stats = stats_for(&orders);
        assert_eq!(stats.total, 6);
        assert_eq!(
            stats.pending + stats.preparing + stats.ready + stats.completed + stats.cancelled,
            stats.total
        );
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.revenue(), Money::from_cents(1000));
    }

    #[test]
    fn test_stats_serialize_shape() {
        let stats = stats_for(&[]);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total"], 0);
        assert_eq!(json["revenue_cents"], 0);
    }

    #[test]
    fn test_cancelled_orders_still_counted_in_range() {
        let reference = ts(2024, 3, 10, 12, 0);
        let orders = vec![order_at(
            "ORD-001",
            OrderStatus::Cancelled,
            500,
            ts(2024, 3, 10, 9, 0),
        )];

        let selected = select_range(&orders, DateFilter::Day, &reference);
        assert_eq!(selected.len(), 1);
        assert_eq!(stats_for(&selected).cancelled, 1);
    }
}
