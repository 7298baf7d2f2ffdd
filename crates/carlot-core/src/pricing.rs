//! # Pricing Policy
//!
//! Deterministic pricing computation: tax, tiered discount, final total.
//! No side effects, no I/O, no clock.
//!
//! ## The Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  base total ──► + tax (7%) ──► subtotal ──► − tier discount ──► total  │
//! │                                    │                                    │
//! │                                    ▼                                    │
//! │                         ┌────────────────────┐                         │
//! │                         │  subtotal ≥ 100k → 20%                      │
//! │                         │  subtotal ≥  50k → 10%                      │
//! │                         │  subtotal ≥  25k →  5%                      │
//! │                         │  below 25k       →  none                    │
//! │                         └────────────────────┘                         │
//! │                                                                         │
//! │  NOTE: tiers key on the POST-TAX subtotal. That is observable          │
//! │  behavior carried over intact; changing it changes every receipt.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lower tier bounds are inclusive and tiers are checked from the top,
//! so exactly one tier ever applies.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::TaxRate;
use crate::DEFAULT_TAX_RATE_BPS;

// =============================================================================
// Discount Tiers
// =============================================================================

/// Discount tiers as (inclusive subtotal threshold in cents, discount bps),
/// ordered highest threshold first.
const DISCOUNT_TIERS: &[(i64, u32)] = &[
    (10_000_000, 2000), // subtotal ≥ $100,000.00 → 20%
    (5_000_000, 1000),  // subtotal ≥  $50,000.00 → 10%
    (2_500_000, 500),   // subtotal ≥  $25,000.00 →  5%
];

// =============================================================================
// Configuration
// =============================================================================

/// Pricing configuration.
///
/// ## Recognized Options
/// - `taxRate`: tax rate in basis points applied to the base total
///   (700 = 7%, the default)
///
/// ## Example
/// ```rust
/// use carlot_core::pricing::PricingConfig;
///
/// let config: PricingConfig = serde_json::from_str(r#"{ "taxRate": 825 }"#).unwrap();
/// assert_eq!(config.tax_rate.bps(), 825);
///
/// let default: PricingConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(default.tax_rate.bps(), 700);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingConfig {
    /// Sales tax applied to the base total.
    pub tax_rate: TaxRate,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            tax_rate: TaxRate::from_bps(DEFAULT_TAX_RATE_BPS),
        }
    }
}

// =============================================================================
// Quote
// =============================================================================

/// The full price breakdown for one cart.
///
/// Produced by [`quote`]; consumed by the checkout engine, which
/// allocates each figure proportionally across the carted vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Sum of sticker prices.
    pub base_cents: i64,
    /// Tax on the base total.
    pub tax_cents: i64,
    /// Base plus tax; the figure the discount tiers key on.
    pub subtotal_cents: i64,
    /// Tier discount amount (zero below the first tier).
    pub discount_cents: i64,
    /// Subtotal minus discount. Never negative: no tier exceeds 100%.
    pub total_cents: i64,
}

impl Quote {
    /// Returns the base total as Money.
    #[inline]
    pub fn base(&self) -> Money {
        Money::from_cents(self.base_cents)
    }

    /// Returns the tax as Money.
    #[inline]
    pub fn tax(&self) -> Money {
        Money::from_cents(self.tax_cents)
    }

    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Returns the discount amount as Money.
    #[inline]
    pub fn discount(&self) -> Money {
        Money::from_cents(self.discount_cents)
    }

    /// Returns the final total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Policy Functions
// =============================================================================

/// Computes tax on a base total.
pub fn compute_tax(base_total: Money, rate: TaxRate) -> Money {
    base_total.calculate_tax(rate)
}

/// Returns the discount AMOUNT for a post-tax subtotal.
///
/// ## Example
/// ```rust
/// use carlot_core::money::Money;
/// use carlot_core::pricing::discount_for;
///
/// // Exactly on the lowest tier boundary: inclusive
/// let subtotal = Money::from_cents(2_500_000); // $25,000.00
/// assert_eq!(discount_for(subtotal).cents(), 125_000); // 5%
///
/// // One cent below: no discount
/// let subtotal = Money::from_cents(2_499_999);
/// assert!(discount_for(subtotal).is_zero());
/// ```
pub fn discount_for(subtotal: Money) -> Money {
    for &(threshold, bps) in DISCOUNT_TIERS {
        if subtotal.cents() >= threshold {
            return subtotal.percentage_of(bps);
        }
    }
    Money::zero()
}

/// Computes the full price breakdown for a base total.
///
/// ## Example
/// ```rust
/// use carlot_core::money::Money;
/// use carlot_core::pricing::{quote, PricingConfig};
///
/// let q = quote(Money::from_cents(2_000_000), &PricingConfig::default());
/// assert_eq!(q.tax_cents, 140_000);       // $1,400.00
/// assert_eq!(q.subtotal_cents, 2_140_000); // $21,400.00
/// assert_eq!(q.discount_cents, 0);        // below the $25,000 tier
/// assert_eq!(q.total_cents, 2_140_000);
/// ```
pub fn quote(base_total: Money, config: &PricingConfig) -> Quote {
    let tax = compute_tax(base_total, config.tax_rate);
    let subtotal = base_total + tax;
    let discount = discount_for(subtotal);
    let total = subtotal - discount;

    Quote {
        base_cents: base_total.cents(),
        tax_cents: tax.cents(),
        subtotal_cents: subtotal.cents(),
        discount_cents: discount.cents(),
        total_cents: total.cents(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(d: i64) -> Money {
        Money::from_major_minor(d, 0)
    }

    #[test]
    fn test_quote_below_first_tier() {
        // One Corolla: $20,000 → tax $1,400 → subtotal $21,400, no discount
        let q = quote(dollars(20_000), &PricingConfig::default());

        assert_eq!(q.base(), dollars(20_000));
        assert_eq!(q.tax(), dollars(1_400));
        assert_eq!(q.subtotal(), dollars(21_400));
        assert_eq!(q.discount(), Money::zero());
        assert_eq!(q.total(), dollars(21_400));
    }

    #[test]
    fn test_quote_top_tier() {
        // $60,000 + $50,000 → base $110,000, tax $7,700,
        // subtotal $117,700 → 20% tier → discount $23,540, total $94,160
        let q = quote(dollars(110_000), &PricingConfig::default());

        assert_eq!(q.tax(), dollars(7_700));
        assert_eq!(q.subtotal(), dollars(117_700));
        assert_eq!(q.discount(), dollars(23_540));
        assert_eq!(q.total(), dollars(94_160));
    }

    #[test]
    fn test_tier_boundaries_are_inclusive() {
        // Exactly $25,000.00 of subtotal → 5%
        assert_eq!(
            discount_for(Money::from_cents(2_500_000)).cents(),
            125_000
        );
        // One cent short → nothing
        assert!(discount_for(Money::from_cents(2_499_999)).is_zero());

        // Exactly $50,000.00 → 10%, not 5%
        assert_eq!(
            discount_for(Money::from_cents(5_000_000)).cents(),
            500_000
        );
        // Exactly $100,000.00 → 20%
        assert_eq!(
            discount_for(Money::from_cents(10_000_000)).cents(),
            2_000_000
        );
    }

    #[test]
    fn test_discount_is_non_decreasing() {
        // Sample the subtotal axis across all tier boundaries; the
        // discount amount must never shrink as the subtotal grows.
        let samples = [
            0,
            100,
            2_499_999,
            2_500_000,
            3_000_000,
            4_999_999,
            5_000_000,
            7_500_000,
            9_999_999,
            10_000_000,
            20_000_000,
        ];

        let mut previous = Money::zero();
        for cents in samples {
            let discount = discount_for(Money::from_cents(cents));
            assert!(
                discount >= previous,
                "discount shrank at subtotal {} cents",
                cents
            );
            previous = discount;
        }
    }

    #[test]
    fn test_total_never_exceeds_subtotal() {
        for cents in [0, 1, 2_500_000, 5_000_000, 10_000_000, 123_456_789] {
            let q = quote(Money::from_cents(cents), &PricingConfig::default());
            assert!(q.total() <= q.subtotal());
            assert!(!q.total().is_negative());
        }
    }

    #[test]
    fn test_config_recognizes_tax_rate_option() {
        let config: PricingConfig = serde_json::from_str(r#"{ "taxRate": 825 }"#).unwrap();
        assert_eq!(config.tax_rate.bps(), 825);

        let defaulted: PricingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(defaulted.tax_rate.bps(), DEFAULT_TAX_RATE_BPS);
    }

    #[test]
    fn test_zero_tax_rate() {
        let config = PricingConfig {
            tax_rate: TaxRate::zero(),
        };
        let q = quote(dollars(30_000), &config);

        assert_eq!(q.tax(), Money::zero());
        assert_eq!(q.subtotal(), dollars(30_000));
        // Subtotal lands in the 5% tier even with no tax
        assert_eq!(q.discount(), dollars(1_500));
    }
}
