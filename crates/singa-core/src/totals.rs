//! # Totals Calculator
//!
//! The single place where an order's money breakdown is computed. Every
//! screen, document and API payload calls [`compute_totals`]; nothing
//! else re-derives these numbers.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sub_total       = Σ quantity × unit_price          (left to right)     │
//! │                                                                         │
//! │  discount_amount = Percentage → sub_total × discount_value / 100        │
//! │                    Amount     → discount_value                          │
//! │                                                                         │
//! │  tax_amount      = sub_total × tax_rate_percent / 100                   │
//! │                                                                         │
//! │  grand_total     = (sub_total + tax_amount)                             │
//! │                    - discount_amount - down_payment                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tax is levied on the undiscounted sub total. No value is rounded here and
//! `grand_total` is not clamped: a down payment larger than the bill yields
//! a negative grand total (a credit).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Rupiah;
use crate::types::{DiscountType, LineItem, OrderAdjustments};

/// Derived money breakdown of an order. Never persisted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub sub_total: Rupiah,
    pub discount_amount: Rupiah,
    pub tax_amount: Rupiah,
    pub grand_total: Rupiah,
}

impl OrderTotals {
    /// True when discount and down payment exceed the taxed sub total.
    ///
    /// Such orders are accepted as they are; callers surface them for
    /// review instead of clamping.
    pub fn is_credit_balance(&self) -> bool {
        self.grand_total.is_negative()
    }
}

/// Computes the totals of an order.
///
/// Pure and infallible: identical inputs always give identical output,
/// and absent numbers have already defaulted to zero on the input types.
///
/// ## Example
/// ```rust
/// use singa_core::{compute_totals, DiscountType, LineItem, OrderAdjustments, Rupiah};
///
/// let items = vec![LineItem::new(4, Rupiah::new(250_000.0))];
/// let adjustments = OrderAdjustments {
///     discount_value: 50_000.0,
///     discount_type: DiscountType::Amount,
///     ..OrderAdjustments::default()
/// };
///
/// let totals = compute_totals(&items, &adjustments);
/// assert_eq!(totals.sub_total.value(), 1_000_000.0);
/// assert_eq!(totals.grand_total.value(), 950_000.0);
/// ```
pub fn compute_totals(items: &[LineItem], adjustments: &OrderAdjustments) -> OrderTotals {
    let sub_total: Rupiah = items.iter().map(LineItem::line_total).sum();

    let discount_amount = match adjustments.discount_type {
        DiscountType::Percentage => sub_total.percent(adjustments.discount_value),
        DiscountType::Amount => Rupiah::new(adjustments.discount_value),
    };

    let tax_amount = sub_total.percent(adjustments.tax_rate_percent);

    let grand_total = (sub_total + tax_amount) - discount_amount - adjustments.down_payment;

    OrderTotals {
        sub_total,
        discount_amount,
        tax_amount,
        grand_total,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_items() -> Vec<LineItem> {
        vec![
            LineItem::new(2, Rupiah::new(500_000.0)),
            LineItem::new(1, Rupiah::new(1_000_000.0)),
        ]
    }

    #[test]
    fn test_reference_order() {
        let adjustments = OrderAdjustments {
            discount_value: 10.0,
            discount_type: DiscountType::Percentage,
            down_payment: Rupiah::new(100_000.0),
            tax_rate_percent: 11.0,
        };

        let totals = compute_totals(&reference_items(), &adjustments);

        assert_eq!(totals.sub_total.value(), 2_000_000.0);
        assert_eq!(totals.discount_amount.value(), 200_000.0);
        assert_eq!(totals.tax_amount.value(), 220_000.0);
        assert_eq!(totals.grand_total.value(), 1_920_000.0);
    }

    #[test]
    fn test_flat_discount() {
        let adjustments = OrderAdjustments {
            discount_value: 50_000.0,
            discount_type: DiscountType::Amount,
            ..OrderAdjustments::default()
        };

        let totals = compute_totals(&reference_items(), &adjustments);
        assert_eq!(totals.discount_amount.value(), 50_000.0);
        assert_eq!(totals.grand_total.value(), 1_950_000.0);
    }

    #[test]
    fn test_unknown_discount_label_is_flat_amount() {
        let adjustments: OrderAdjustments = serde_json::from_str(
            r#"{"discountValue": 50000, "discountType": "bogus"}"#,
        )
        .unwrap();

        let totals = compute_totals(&reference_items(), &adjustments);
        assert_eq!(totals.discount_amount.value(), 50_000.0);
    }

    #[test]
    fn test_sub_total_is_ordered_sum() {
        let items = vec![
            LineItem::new(3, Rupiah::new(0.1)),
            LineItem::new(1, Rupiah::new(0.2)),
            LineItem::new(7, Rupiah::new(1_234.567)),
        ];

        let expected = ((0.0 + 3.0 * 0.1) + 1.0 * 0.2) + 7.0 * 1_234.567;
        let totals = compute_totals(&items, &OrderAdjustments::default());
        assert_eq!(totals.sub_total.value(), expected);
    }

    #[test]
    fn test_deterministic() {
        let adjustments = OrderAdjustments {
            discount_value: 12.5,
            discount_type: DiscountType::Percentage,
            down_payment: Rupiah::new(33_333.33),
            tax_rate_percent: 11.0,
        };
        let first = compute_totals(&reference_items(), &adjustments);
        let second = compute_totals(&reference_items(), &adjustments);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_order() {
        let totals = compute_totals(&[], &OrderAdjustments::default());
        assert_eq!(totals, OrderTotals::default());
        assert!(!totals.is_credit_balance());
    }

    #[test]
    fn test_negative_grand_total_not_clamped() {
        let adjustments = OrderAdjustments {
            down_payment: Rupiah::new(5_000_000.0),
            ..OrderAdjustments::default()
        };

        let totals = compute_totals(&reference_items(), &adjustments);
        assert_eq!(totals.grand_total.value(), -3_000_000.0);
        assert!(totals.is_credit_balance());
    }

    #[test]
    fn test_tax_uses_undiscounted_sub_total() {
        let adjustments = OrderAdjustments {
            discount_value: 50.0,
            discount_type: DiscountType::Percentage,
            tax_rate_percent: 10.0,
            ..OrderAdjustments::default()
        };

        let totals = compute_totals(&reference_items(), &adjustments);
        assert_eq!(totals.tax_amount.value(), 200_000.0);
        assert_eq!(totals.grand_total.value(), 1_200_000.0);
    }
}
