//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In many retail systems:                                                │
//! │    $10.00 / 3 = $3.33 (×3 = $9.99)  → Lost $0.01!                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1000 cents / 3 = 333 cents (×3 = 999 cents)                         │
//! │    We KNOW where the cent went, and assign it explicitly                │
//! │    (see `prorate`: the residual lands on the last share)                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use carlot_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(2_000_000); // $20,000.00
//!
//! // Arithmetic operations
//! let total = price + Money::from_cents(1_500_000); // $35,000.00
//!
//! // NEVER do this:
//! // let bad = Money::from_float(19999.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: intermediate subtractions may dip below zero
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for serialization
///
/// ## Where Money Flows
/// ```text
/// Vehicle.price_cents ──► cart base total ──► tax ──► subtotal
///                                                       │
///      SaleRecord allocations ◄── final total ◄── discount tier
/// ```
/// Every monetary value in the system flows through this type; cent
/// rounding happens only where an amount leaves intermediate math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use carlot_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax on this amount.
    ///
    /// ## Rounding
    /// Intermediate pricing math stays in unrounded cents; the only
    /// rounding in the whole pipeline happens here and in
    /// [`Money::percentage_of`], half away from zero at the cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5).
    /// i128 intermediates prevent overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use carlot_core::money::Money;
    /// use carlot_core::types::TaxRate;
    ///
    /// let price = Money::from_cents(2_000_000); // $20,000.00
    /// let rate = TaxRate::from_bps(700);        // 7%
    ///
    /// let tax = price.calculate_tax(rate);
    /// assert_eq!(tax.cents(), 140_000); // $1,400.00
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Returns the given percentage of this amount, in basis points.
    ///
    /// Used for tier discounts: the returned value is the discount
    /// AMOUNT, not the discounted total.
    ///
    /// ## Example
    /// ```rust
    /// use carlot_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(11_770_000); // $117,700.00
    /// let discount = subtotal.percentage_of(2000);  // 20%
    /// assert_eq!(discount.cents(), 2_354_000);      // $23,540.00
    /// ```
    pub fn percentage_of(&self, bps: u32) -> Money {
        let amount = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_cents(amount as i64)
    }

    /// Splits this amount proportionally across `weights`.
    ///
    /// ## Reconciliation Guarantee
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  total: $94,160.00   weights: [$60,000.00, $50,000.00]             │
    /// │                                                                     │
    /// │  share[0] = total × 60000/110000 = $51,360.00                      │
    /// │  share[1] = total − share[0]     = $42,800.00   ← residual here     │
    /// │                                                                     │
    /// │  sum(shares) == total, ALWAYS, to the exact cent                   │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    /// All shares except the last are rounded to the cent; the last share
    /// is whatever remains, so the shares reconcile exactly against the
    /// total no matter how the divisions fell.
    ///
    /// Returns all-zero shares when the weights sum to zero or less;
    /// callers reject that case up front (see `DegenerateCart`).
    pub fn prorate(&self, weights: &[Money]) -> Vec<Money> {
        let whole: i128 = weights.iter().map(|w| w.0 as i128).sum();
        if whole <= 0 {
            return vec![Money::zero(); weights.len()];
        }

        let mut shares = Vec::with_capacity(weights.len());
        let mut assigned: i64 = 0;
        for (i, weight) in weights.iter().enumerate() {
            if i + 1 == weights.len() {
                shares.push(Money(self.0 - assigned));
            } else {
                let share = ((self.0 as i128 * weight.0 as i128 + whole / 2) / whole) as i64;
                shares.push(Money(share));
                assigned += share;
            }
        }
        shares
    }

    /// Renders the amount as a plain decimal string (`20000.00`).
    ///
    /// This is the flat-file format; `Display` adds a dollar sign for
    /// human-readable output.
    pub fn decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Error returned when a decimal string cannot be parsed as Money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid money amount")]
pub struct ParseMoneyError;

/// Parses plain decimal amounts: `1234`, `1234.5`, `1234.56`.
///
/// More than two fractional digits is rejected rather than silently
/// truncated; amounts are exact cents or they are errors.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (major_str, minor_str) = match digits.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (digits, ""),
        };

        if major_str.is_empty() || !major_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseMoneyError);
        }
        if !minor_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseMoneyError);
        }

        let major: i64 = major_str.parse().map_err(|_| ParseMoneyError)?;
        let minor: i64 = match minor_str.len() {
            0 => 0,
            1 => minor_str.parse::<i64>().map_err(|_| ParseMoneyError)? * 10,
            2 => minor_str.parse().map_err(|_| ParseMoneyError)?,
            _ => return Err(ParseMoneyError),
        };

        let cents = major * 100 + minor;
        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Summing an iterator of Money values.
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(20_000, 0);
        assert_eq!(money.cents(), 2_000_000);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(2_000_000).decimal_string(), "20000.00");
        assert_eq!(Money::from_cents(105).decimal_string(), "1.05");
        assert_eq!(Money::from_cents(0).decimal_string(), "0.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!("20000.00".parse::<Money>().unwrap().cents(), 2_000_000);
        assert_eq!("1234".parse::<Money>().unwrap().cents(), 123_400);
        assert_eq!("1234.5".parse::<Money>().unwrap().cents(), 123_450);
        assert_eq!("-5.50".parse::<Money>().unwrap().cents(), -550);

        assert!("".parse::<Money>().is_err());
        assert!("12.345".parse::<Money>().is_err());
        assert!("12.x".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
    }

    #[test]
    fn test_parse_round_trips_decimal_string() {
        let amounts = [0, 1, 99, 100, 2_000_000, 123_456_789];
        for cents in amounts {
            let money = Money::from_cents(cents);
            assert_eq!(money.decimal_string().parse::<Money>().unwrap(), money);
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let total: Money = [a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_tax_calculation_basic() {
        // $20,000.00 at 7% = $1,400.00
        let amount = Money::from_cents(2_000_000);
        let rate = TaxRate::from_bps(700);
        let tax = amount.calculate_tax(rate);
        assert_eq!(tax.cents(), 140_000);
    }

    #[test]
    fn test_tax_calculation_with_rounding() {
        // $10.00 at 8.25% = $0.825 → $0.83 (half away from zero)
        let amount = Money::from_cents(1000);
        let rate = TaxRate::from_bps(825);
        let tax = amount.calculate_tax(rate);
        assert_eq!(tax.cents(), 83);
    }

    #[test]
    fn test_percentage_of() {
        let subtotal = Money::from_cents(10000); // $100.00
        assert_eq!(subtotal.percentage_of(1000).cents(), 1000); // 10% = $10.00
        assert_eq!(subtotal.percentage_of(500).cents(), 500); // 5% = $5.00
        assert_eq!(subtotal.percentage_of(0).cents(), 0);
    }

    #[test]
    fn test_prorate_exact_split() {
        // $94,160.00 across $60,000 and $50,000 weights
        let total = Money::from_cents(9_416_000);
        let weights = [Money::from_cents(6_000_000), Money::from_cents(5_000_000)];

        let shares = total.prorate(&weights);
        assert_eq!(shares[0].cents(), 5_136_000); // $51,360.00
        assert_eq!(shares[1].cents(), 4_280_000); // $42,800.00
        assert_eq!(shares.iter().copied().sum::<Money>(), total);
    }

    #[test]
    fn test_prorate_residual_goes_to_last_share() {
        // $10.00 over three equal weights: 333 + 333 + 334
        let total = Money::from_cents(1000);
        let weights = [Money::from_cents(1); 3];

        let shares = total.prorate(&weights);
        assert_eq!(shares[0].cents(), 333);
        assert_eq!(shares[1].cents(), 333);
        assert_eq!(shares[2].cents(), 334);
        assert_eq!(shares.iter().copied().sum::<Money>(), total);
    }

    #[test]
    fn test_prorate_zero_weights() {
        let total = Money::from_cents(1000);
        let shares = total.prorate(&[Money::zero(), Money::zero()]);
        assert_eq!(shares, vec![Money::zero(), Money::zero()]);
    }

    #[test]
    fn test_prorate_single_weight_takes_everything() {
        let total = Money::from_cents(2_140_000);
        let shares = total.prorate(&[Money::from_cents(2_000_000)]);
        assert_eq!(shares, vec![total]);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(positive.is_positive());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
    }
}
