//! # Domain Types
//!
//! Core domain types used throughout Carlot.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Vehicle      │   │    Customer     │   │   SaleRecord    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  vehicle brand  │       │
//! │  │  brand          │   │  name, age      │   │  + model        │       │
//! │  │  model          │   │  address        │   │  customer name  │       │
//! │  │  price_cents    │   │  phone, email   │   │  + email        │       │
//! │  └─────────────────┘   └─────────────────┘   │  base/tax/      │       │
//! │                                              │  discount/final │       │
//! │  ┌─────────────────┐   ┌─────────────────┐   └─────────────────┘       │
//! │  │    TaxRate      │   │ Dealership-     │                             │
//! │  │  ─────────────  │   │ Profile         │   SaleRecord is append-    │
//! │  │  bps (u32)      │   │  name           │   only: one per vehicle    │
//! │  │  700 = 7%       │   │  location       │   sold, never mutated      │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Vehicles and customers carry UUID v4 string ids assigned at creation.
//! Two vehicles with identical brand/model/price are still distinct
//! entities; everything that matters for checkout compares by id.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 700 bps = 7% (the default sales tax applied at checkout)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
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
// Vehicle
// =============================================================================

/// A vehicle available for sale.
///
/// Immutable once sold: a sold vehicle is removed from the catalog,
/// never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier (UUID v4), assigned at creation.
    pub id: String,

    /// Manufacturer, e.g. "Toyota".
    pub brand: String,

    /// Model name, e.g. "Corolla".
    pub model: String,

    /// Sticker price in cents (smallest currency unit).
    pub price_cents: i64,
}

impl Vehicle {
    /// Creates a vehicle with a fresh id.
    pub fn new(brand: impl Into<String>, model: impl Into<String>, price: Money) -> Self {
        Vehicle {
            id: Uuid::new_v4().to_string(),
            brand: brand.into(),
            model: model.into(),
            price_cents: price.cents(),
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.brand, self.model, self.price())
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A registered customer.
///
/// Never mutated or deleted once registered; the roster only grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier (UUID v4), assigned at registration.
    pub id: String,

    /// Full name.
    pub name: String,

    /// Age in years. The validation layer constrains this to 18-120
    /// before a customer ever reaches the catalog.
    pub age: u32,

    /// Street address.
    pub address: String,

    /// Phone number.
    pub phone: String,

    /// Email address.
    pub email: String,
}

impl Customer {
    /// Creates a customer with a fresh id.
    pub fn new(
        name: impl Into<String>,
        age: u32,
        address: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Customer {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            age,
            address: address.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}

// =============================================================================
// Sale Record
// =============================================================================

/// One vehicle's share of a completed checkout.
///
/// Uses the snapshot pattern: vehicle and customer details are copied in
/// at commit time, so the record stays meaningful after the vehicle has
/// left the catalog. Append-only; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Vehicle brand at time of sale (frozen).
    pub vehicle_brand: String,

    /// Vehicle model at time of sale (frozen).
    pub vehicle_model: String,

    /// Purchasing customer's name (frozen).
    pub customer_name: String,

    /// Purchasing customer's email (frozen).
    pub customer_email: String,

    /// This vehicle's sticker price in cents.
    pub base_price_cents: i64,

    /// This vehicle's proportional share of the cart tax.
    pub tax_cents: i64,

    /// This vehicle's proportional share of the cart discount.
    pub discount_cents: i64,

    /// This vehicle's proportional share of the final total.
    pub final_price_cents: i64,
}

impl SaleRecord {
    /// Returns the base price as Money.
    #[inline]
    pub fn base_price(&self) -> Money {
        Money::from_cents(self.base_price_cents)
    }

    /// Returns the allocated tax as Money.
    #[inline]
    pub fn tax(&self) -> Money {
        Money::from_cents(self.tax_cents)
    }

    /// Returns the allocated discount as Money.
    #[inline]
    pub fn discount(&self) -> Money {
        Money::from_cents(self.discount_cents)
    }

    /// Returns the allocated final price as Money.
    #[inline]
    pub fn final_price(&self) -> Money {
        Money::from_cents(self.final_price_cents)
    }
}

// =============================================================================
// Dealership Profile
// =============================================================================

/// The store's own identity, shown on screens and persisted separately
/// from inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealershipProfile {
    /// Display name of the dealership.
    pub name: String,

    /// Street or city location.
    pub location: String,
}

impl Default for DealershipProfile {
    fn default() -> Self {
        DealershipProfile {
            name: "Default Dealership".to_string(),
            location: "Default Location".to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(700);
        assert_eq!(rate.bps(), 700);
        assert!((rate.percentage() - 7.0).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(7.0);
        assert_eq!(rate.bps(), 700);
    }

    #[test]
    fn test_vehicle_identity_is_unique() {
        let price = Money::from_cents(2_000_000);
        let a = Vehicle::new("Toyota", "Corolla", price);
        let b = Vehicle::new("Toyota", "Corolla", price);

        // Same brand/model/price, still two distinct entities
        assert_ne!(a.id, b.id);
        assert_eq!(a.price(), b.price());
    }

    #[test]
    fn test_vehicle_display() {
        let v = Vehicle {
            id: "v-1".to_string(),
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            price_cents: 2_000_000,
        };
        assert_eq!(v.to_string(), "Toyota Corolla - $20000.00");
    }

    #[test]
    fn test_default_profile() {
        let profile = DealershipProfile::default();
        assert_eq!(profile.name, "Default Dealership");
        assert_eq!(profile.location, "Default Location");
    }
}
