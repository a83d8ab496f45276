//! # Money Module
//!
//! Provides the `Rupiah` type for monetary values.
//!
//! ## Why Floating Point Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  COMPATIBILITY WITH STORED ORDERS                                       │
//! │                                                                         │
//! │  Every stored order was totalled with double-precision arithmetic:     │
//! │    subTotal = Σ qty × price                                             │
//! │    grand    = (subTotal + tax) - discount - downPayment                 │
//! │                                                                         │
//! │  Re-totalling with integer sen would disagree with persisted            │
//! │  `totalBayar` values, so amounts stay f64 and are NEVER rounded         │
//! │  internally. Rounding happens only in `format::format_currency`.        │
//! │                                                                         │
//! │  Rupiah has no circulating minor unit, so typical amounts are whole     │
//! │  numbers well inside the exact-integer range of f64 (2^53).             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use singa_core::money::Rupiah;
//!
//! let price = Rupiah::new(500_000.0);
//! let line_total = price * 2;
//! assert_eq!(line_total.value(), 1_000_000.0);
//! assert_eq!(line_total.to_string(), "Rp\u{a0}1.000.000,00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use ts_rs::TS;

use crate::format::{format_currency, CurrencyStyle};

// =============================================================================
// Rupiah Type
// =============================================================================

/// A monetary amount in Indonesian Rupiah.
///
/// ## Design Decisions
/// - **f64**: matches how stored orders were computed (see module docs)
/// - **Signed**: grand totals may go negative when the down payment and
///   discount exceed the taxed sub total
/// - **Non-finite values collapse to zero** on construction, so a bad
///   input can never poison a whole summary
///
/// ## Where Rupiah is Used
/// ```text
/// LineItem.unit_price ──► LineItem::line_total() ──► OrderTotals.sub_total
///                                                          │
/// OrderAdjustments.down_payment ───────────────────► OrderTotals.grand_total
///                                                          │
///                                          format_currency ──► documents
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rupiah(f64);

impl Rupiah {
    /// Creates an amount. NaN and infinities become zero.
    #[inline]
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Rupiah(value)
        } else {
            Rupiah(0.0)
        }
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Zero rupiah.
    #[inline]
    pub const fn zero() -> Self {
        Rupiah(0.0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Checks if the value is below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Returns `percent` percent of this amount, computed as
    /// `amount * percent / 100` in that order.
    ///
    /// ## Example
    /// ```rust
    /// use singa_core::money::Rupiah;
    ///
    /// let sub_total = Rupiah::new(2_000_000.0);
    /// assert_eq!(sub_total.percent(11.0).value(), 220_000.0);
    /// ```
    #[inline]
    pub fn percent(&self, percent: f64) -> Rupiah {
        Rupiah::new(self.0 * percent / 100.0)
    }

    /// Multiplies a unit price by a quantity.
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Rupiah {
        Rupiah::new(f64::from(qty) * self.0)
    }

    /// Formats the amount with the given currency style.
    pub fn format(&self, style: CurrencyStyle) -> String {
        format_currency(self.0, style)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses the locale currency style (`Rp 1.000,00`).
impl fmt::Display for Rupiah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_currency(self.0, CurrencyStyle::Locale))
    }
}

impl From<f64> for Rupiah {
    fn from(value: f64) -> Self {
        Rupiah::new(value)
    }
}

impl Add for Rupiah {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Rupiah::new(self.0 + other.0)
    }
}

impl AddAssign for Rupiah {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Rupiah {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Rupiah::new(self.0 - other.0)
    }
}

impl SubAssign for Rupiah {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Rupiah {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Rupiah(-self.0)
    }
}

/// Multiplication by a quantity.
impl Mul<u32> for Rupiah {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Left-to-right summation starting from zero.
impl Sum for Rupiah {
    fn sum<I: Iterator<Item = Rupiah>>(iter: I) -> Self {
        iter.fold(Rupiah::zero(), |acc, amount| acc + amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
