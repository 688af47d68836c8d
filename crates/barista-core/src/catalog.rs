//! # Catalog Pricing Helper
//!
//! Computes a product's effective price given an optional time-windowed
//! percentage discount.
//!
//! ## Contract
//! - Pure functions of product snapshot + an explicit `now` instant
//! - Window bounds are inclusive; an absent bound is unbounded on that side
//! - A zero/negative percentage means no promotion
//! - The effective price is never negative
//!
//! The result feeds [`crate::types::LineItem::unit_price_cents`], so the
//! catalog discount and the manual checkout discount never stack
//! multiplicatively: the manual discount applies to the already-discounted
//! subtotal.

use chrono::{DateTime, Utc};

use crate::money::Money;
use crate::types::ProductSnapshot;

/// Converts a 0-100 percentage into clamped basis points.
fn percent_to_bps(percent: f64) -> u32 {
    let clamped = percent.clamp(0.0, 100.0);
    (clamped * 100.0).round() as u32
}

/// Checks whether the product's promotional discount is active at `now`.
///
/// True iff the percentage is > 0 and `now` falls within the window,
/// boundary instants included.
///
/// ## Example
/// ```rust
/// use barista_core::catalog::is_discount_active;
/// use barista_core::types::ProductSnapshot;
/// use chrono::{TimeZone, Utc};
///
/// let product = ProductSnapshot {
///     id: "latte".into(),
///     name: "Latte".into(),
///     category: "espresso".into(),
///     price_cents: 450,
///     stock: 10,
///     is_available: true,
///     discount_percent: Some(20.0),
///     discount_starts_at: Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).single(),
///     discount_ends_at: Utc.with_ymd_and_hms(2024, 1, 20, 23, 59, 59).single(),
/// };
///
/// let inside = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
/// assert!(is_discount_active(&product, inside));
/// ```
pub fn is_discount_active(product: &ProductSnapshot, now: DateTime<Utc>) -> bool {
    let percent = match product.discount_percent {
        Some(p) if p > 0.0 => p,
        _ => return false,
    };
    debug_assert!(percent > 0.0);

    if let Some(start) = product.discount_starts_at {
        if now < start {
            return false;
        }
    }
    if let Some(end) = product.discount_ends_at {
        if now > end {
            return false;
        }
    }
    true
}

/// Computes the product's effective price at `now`.
///
/// Returns the list price unchanged when the discount is absent, zero,
/// negative, or outside its window; otherwise
/// `price × (1 - percent/100)`, floored at zero.
pub fn effective_price(product: &ProductSnapshot, now: DateTime<Utc>) -> Money {
    if !is_discount_active(product, now) {
        return product.price();
    }

    // Unwrap is safe behind is_discount_active, but stay total anyway.
    let percent = product.discount_percent.unwrap_or(0.0);
    product
        .price()
        .apply_percentage_discount(percent_to_bps(percent))
        .max(Money::zero())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn promo_product(percent: Option<f64>) -> ProductSnapshot {
        ProductSnapshot {
            id: "latte".to_string(),
            name: "Latte".to_string(),
            category: "espresso".to_string(),
            price_cents: 450,
            stock: 10,
            is_available: true,
            discount_percent: percent,
            discount_starts_at: Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).single(),
            discount_ends_at: Utc.with_ymd_and_hms(2024, 1, 20, 23, 59, 59).single(),
        }
    }

    fn at(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_no_discount_returns_list_price() {
        let product = promo_product(None);
        assert_eq!(
            effective_price(&product, at(2024, 1, 15, 12)),
            Money::from_cents(450)
        );
    }

    #[test]
    fn test_zero_or_negative_percent_is_inactive() {
        assert!(!is_discount_active(&promo_product(Some(0.0)), at(2024, 1, 15, 12)));
        assert!(!is_discount_active(&promo_product(Some(-10.0)), at(2024, 1, 15, 12)));
        assert_eq!(
            effective_price(&promo_product(Some(-10.0)), at(2024, 1, 15, 12)),
            Money::from_cents(450)
        );
    }

    #[test]
    fn test_window_boundaries_inclusive() {
        let product = promo_product(Some(20.0));

        let start = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 20, 23, 59, 59).unwrap();
        assert!(is_discount_active(&product, start));
        assert!(is_discount_active(&product, end));

        // 20% off $4.50 = $3.60 at both boundary instants
        assert_eq!(effective_price(&product, start), Money::from_cents(360));
        assert_eq!(effective_price(&product, end), Money::from_cents(360));
    }

    #[test]
    fn test_outside_window_returns_list_price() {
        let product = promo_product(Some(20.0));

        let before = at(2024, 1, 9, 23);
        let after = at(2024, 1, 21, 0);
        assert!(!is_discount_active(&product, before));
        assert!(!is_discount_active(&product, after));
        assert_eq!(effective_price(&product, before), Money::from_cents(450));
        assert_eq!(effective_price(&product, after), Money::from_cents(450));
    }

    #[test]
    fn test_unbounded_window_sides() {
        let mut product = promo_product(Some(10.0));
        product.discount_starts_at = None;
        assert!(is_discount_active(&product, at(2020, 6, 1, 0)));

        product.discount_ends_at = None;
        assert!(is_discount_active(&product, at(2030, 6, 1, 0)));
    }

    #[test]
    fn test_full_discount_floors_at_zero() {
        let product = promo_product(Some(100.0));
        assert_eq!(
            effective_price(&product, at(2024, 1, 15, 12)),
            Money::zero()
        );

        // Over-100 input clamps to 100, never negative
        let product = promo_product(Some(150.0));
        assert_eq!(
            effective_price(&product, at(2024, 1, 15, 12)),
            Money::zero()
        );
    }
}
