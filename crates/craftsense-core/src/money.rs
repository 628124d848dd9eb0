//! # Money Module
//!
//! Provides the `Money` type for marketplace prices and the `ShareRate`
//! used to split a price between the artisan and the platform.
//!
//! ## Why Whole Units?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog prices are whole rupees (e.g. 1500 for a workshop seat).       │
//! │                                                                         │
//! │  Every amount is an i64 of whole currency units:                        │
//! │    price 100 × quantity 2          = 200                                │
//! │    artisan share of 199 at 90%     = floor(179.1) = 179                 │
//! │                                                                         │
//! │  The split always rounds DOWN in the platform's favour, so the         │
//! │  artisan share can never exceed the price it was derived from.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use craftsense_core::money::{Money, ShareRate};
//!
//! let price = Money::new(199);
//! let share = price.share(ShareRate::from_bps(9000));
//! assert_eq!(share, Money::new(179));
//! assert_eq!(price * 2, Money::new(398));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole currency units.
///
/// Serializes as a bare JSON number, so persisted cart entries read
/// `"price": 100` rather than a wrapped object.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn new(units: i64) -> Self {
        Money(units)
    }

    /// Returns the amount in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Zero.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use craftsense_core::money::Money;
    ///
    /// assert_eq!(Money::new(250).multiply_quantity(3), Money::new(750));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Portion of this amount at the given rate, rounded down.
    ///
    /// ## Implementation
    /// Integer math in i128: `amount * bps / 10000`. Rust integer division
    /// truncates toward zero, which is the floor for the non-negative
    /// amounts the catalog carries.
    ///
    /// ## Example
    /// ```rust
    /// use craftsense_core::money::{Money, ShareRate};
    ///
    /// let rate = ShareRate::from_bps(9000); // 90%
    /// assert_eq!(Money::new(1500).share(rate), Money::new(1350));
    /// assert_eq!(Money::new(15).share(rate), Money::new(13)); // 13.5 → 13
    /// ```
    pub fn share(&self, rate: ShareRate) -> Money {
        let units = self.0 as i128 * rate.bps() as i128 / 10_000;
        Money(units as i64)
    }
}

// =============================================================================
// Share Rate
// =============================================================================

/// A share of a price in basis points (1 bps = 0.01%).
///
/// 9000 bps = 90%, the marketplace's default artisan share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShareRate(u32);

impl ShareRate {
    /// Full price (100%).
    pub const FULL: ShareRate = ShareRate(10_000);

    /// Creates a share rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        ShareRate(bps)
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
}

impl Default for ShareRate {
    fn default() -> Self {
        ShareRate(crate::DEFAULT_ARTISAN_SHARE_BPS)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================
//
// Arithmetic saturates at the i64 bounds instead of wrapping.

/// Plain number, no currency symbol. The front end owns symbol placement.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl From<i64> for Money {
    fn from(units: i64) -> Self {
        Money(units)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Money::new(1000);
        let b = Money::new(500);

        assert_eq!((a + b).units(), 1500);
        assert_eq!((a - b).units(), 500);
        assert_eq!((a * 3).units(), 3000);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::new(i64::MAX / 2);

        assert_eq!(big.multiply_quantity(3), Money::new(i64::MAX));
        assert_eq!(big * i64::MAX, Money::new(i64::MAX));
        assert_eq!(big + big + big, Money::new(i64::MAX));
        assert_eq!(Money::new(i64::MIN) - Money::new(1), Money::new(i64::MIN));

        let mut acc = big;
        acc += Money::new(i64::MAX);
        assert_eq!(acc, Money::new(i64::MAX));

        let total: Money = [Money::new(i64::MAX), Money::new(1)].into_iter().sum();
        assert_eq!(total, Money::new(i64::MAX));
    }

    #[test]
    fn test_share_rounds_down() {
        let rate = ShareRate::from_bps(9000);
        assert_eq!(Money::new(100).share(rate), Money::new(90));
        assert_eq!(Money::new(199).share(rate), Money::new(179));
        assert_eq!(Money::new(1).share(rate), Money::zero());
        assert_eq!(Money::zero().share(rate), Money::zero());
    }

    #[test]
    fn test_share_never_exceeds_amount() {
        for units in [0, 1, 7, 99, 1500, 123_457] {
            let amount = Money::new(units);
            assert!(amount.share(ShareRate::default()) <= amount);
            assert_eq!(amount.share(ShareRate::from_bps(10_000)), amount);
        }
    }

    #[test]
    fn test_share_large_amount_does_not_overflow() {
        let amount = Money::new(i64::MAX / 2);
        let share = amount.share(ShareRate::from_bps(9000));
        assert!(share < amount);
        assert!(share.units() > 0);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::new(10), Money::new(20), Money::new(12)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::new(42));

        let empty: Money = std::iter::empty().sum();
        assert_eq!(empty, Money::zero());
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&Money::new(1500)).unwrap();
        assert_eq!(json, "1500");

        let back: Money = serde_json::from_str("90").unwrap();
        assert_eq!(back, Money::new(90));
    }

    #[test]
    fn test_default_rate_is_ninety_percent() {
        assert_eq!(ShareRate::default().bps(), 9000);
        assert!((ShareRate::default().percentage() - 90.0).abs() < 0.001);
    }
}
