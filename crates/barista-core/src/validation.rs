//! # Validation Module
//!
//! Submission-time validation gates for Barista POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two-Tier Input Policy                              │
//! │                                                                         │
//! │  Tier 1: Live preview (every keystroke)                                │
//! │  ├── pricing::DiscountInput::normalize()                               │
//! │  └── Malformed input degrades to zero discount, never errors           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Tier 2: Submission gate (checkout button)                             │
//! │  ├── THIS MODULE: strict parses and business-rule checks               │
//! │  └── Malformed input becomes a ValidationError, store untouched        │
//! │                                                                         │
//! │  Both tiers produce the SAME clamped numbers on valid input.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use barista_core::validation::{validate_quantity, parse_discount_strict};
//! use barista_core::pricing::DiscountInput;
//!
//! validate_quantity(2).unwrap();
//! parse_discount_strict(&DiscountInput::percent("10")).unwrap();
//! assert!(parse_discount_strict(&DiscountInput::percent("abc")).is_err());
//! ```

use crate::error::ValidationError;
use crate::pricing::{DiscountInput, DiscountKind, ManualDiscount};
use crate::types::LineItem;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Line Item Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates the line items of a normal (non-adjustment) order draft.
///
/// ## Rules
/// - At least one line item
/// - At most MAX_CART_ITEMS lines
/// - Every quantity positive and within bounds
/// - No negative unit prices (only synthetic adjustment lines carry those,
///   and they never pass through this gate)
pub fn validate_line_items(items: &[LineItem]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }

    if items.len() > MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "items".to_string(),
            min: 1,
            max: MAX_CART_ITEMS as i64,
        });
    }

    for item in items {
        validate_quantity(item.quantity)?;
        if item.unit_price_cents < 0 {
            return Err(ValidationError::OutOfRange {
                field: "unit_price".to_string(),
                min: 0,
                max: i64::MAX,
            });
        }
    }

    Ok(())
}

/// Validates a customer name for receipts.
///
/// ## Rules
/// - May be empty (walk-in customers)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed name.
pub fn validate_customer_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "customer".to_string(),
            max: 100,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Discount Validators
// =============================================================================

/// Strict manual-discount parse for the submission gate.
///
/// Unlike [`DiscountInput::normalize`], malformed or out-of-range input is
/// an error here instead of silently degrading. An empty value means "no
/// discount" and is accepted as zero.
pub fn parse_discount_strict(input: &DiscountInput) -> ValidationResult<ManualDiscount> {
    let raw = input.value.trim();
    if raw.is_empty() {
        return Ok(match input.kind {
            DiscountKind::Percent => ManualDiscount::Percent { bps: 0 },
            DiscountKind::Amount => ManualDiscount::Amount {
                amount: crate::money::Money::zero(),
            },
        });
    }

    match input.kind {
        DiscountKind::Percent => {
            let percent: f64 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
                field: "discount".to_string(),
                reason: "must be a number".to_string(),
            })?;
            if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
                return Err(ValidationError::OutOfRange {
                    field: "discount".to_string(),
                    min: 0,
                    max: 100,
                });
            }
            Ok(ManualDiscount::Percent {
                bps: (percent * 100.0).round() as u32,
            })
        }
        DiscountKind::Amount => {
            let amount = crate::money::Money::parse_decimal(raw).ok_or_else(|| {
                ValidationError::InvalidFormat {
                    field: "discount".to_string(),
                    reason: "must be a number".to_string(),
                }
            })?;
            if amount.is_negative() {
                return Err(ValidationError::MustBePositive {
                    field: "discount".to_string(),
                });
            }
            Ok(ManualDiscount::Amount { amount })
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn item(qty: i64) -> LineItem {
        LineItem {
            product_id: "latte".to_string(),
            name: "Latte".to_string(),
            category: "espresso".to_string(),
            unit_price_cents: 450,
            quantity: qty,
            variant: None,
        }
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_line_items() {
        assert!(validate_line_items(&[item(1)]).is_ok());
        assert!(validate_line_items(&[]).is_err());
        assert!(validate_line_items(&[item(0)]).is_err());

        let mut negative = item(1);
        negative.unit_price_cents = -100;
        assert!(validate_line_items(&[negative]).is_err());
    }

    #[test]
    fn test_validate_customer_name() {
        assert_eq!(validate_customer_name("  Alex  ").unwrap(), "Alex");
        assert_eq!(validate_customer_name("").unwrap(), "");
        assert!(validate_customer_name(&"A".repeat(200)).is_err());
    }

    #[test]
    fn test_strict_discount_accepts_valid_input() {
        let parsed = parse_discount_strict(&DiscountInput::percent("12.5")).unwrap();
        assert_eq!(parsed, ManualDiscount::Percent { bps: 1250 });

        let parsed = parse_discount_strict(&DiscountInput::amount("2.25")).unwrap();
        assert_eq!(
            parsed,
            ManualDiscount::Amount {
                amount: Money::from_cents(225)
            }
        );
    }

    #[test]
    fn test_strict_discount_rejects_what_preview_degrades() {
        // The lenient tier turns these into zero; the gate refuses them.
        assert!(parse_discount_strict(&DiscountInput::percent("abc")).is_err());
        assert!(parse_discount_strict(&DiscountInput::percent("150")).is_err());
        assert!(parse_discount_strict(&DiscountInput::percent("-20")).is_err());
        assert!(parse_discount_strict(&DiscountInput::amount("-3")).is_err());
        assert!(parse_discount_strict(&DiscountInput::amount("oops")).is_err());
    }

    #[test]
    fn test_strict_discount_empty_means_none() {
        let parsed = parse_discount_strict(&DiscountInput::percent("")).unwrap();
        assert_eq!(parsed, ManualDiscount::Percent { bps: 0 });

        let parsed = parse_discount_strict(&DiscountInput::amount("  ")).unwrap();
        assert_eq!(
            parsed,
            ManualDiscount::Amount {
                amount: Money::zero()
            }
        );
    }

    #[test]
    fn test_tiers_agree_on_valid_input() {
        for raw in ["0", "10", "37.5", "100"] {
            let input = DiscountInput::percent(raw);
            let strict = parse_discount_strict(&input).unwrap();
            assert_eq!(strict, input.normalize(), "input {raw:?}");
        }
    }
}
