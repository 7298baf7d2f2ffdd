//! # carlot-core: Pure Business Logic for Carlot
//!
//! This crate is the **heart** of Carlot, a single-store vehicle
//! dealership system. It contains all business logic as pure functions
//! and explicit state with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Carlot Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Interaction Layer (forms/menus)                │   │
//! │  │   add vehicle ──► register customer ──► build cart ──► checkout │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ carlot-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │  Vehicle  │  │   Money   │  │ tax+tiers │  │   rules   │  │   │
//! │  │   │  Customer │  │  prorate  │  │   Quote   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────────────────────┐│   │
//! │  │   │  catalog  │  │   cart    │  │         checkout           ││   │
//! │  │   │ inventory │  │ selection │  │  validate → price → commit ││   │
//! │  │   └───────────┘  └───────────┘  └────────────────────────────┘│   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CLOCK • DETERMINISTIC                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │ Ledger trait                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 carlot-store (flat-file layer)                  │   │
//! │  │            cars.txt, customers.txt, sales.txt, ...             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Vehicle, Customer, SaleRecord, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Tax and tiered-discount policy
//! - [`catalog`] - Available vehicles and registered customers
//! - [`cart`] - Per-session vehicle selection
//! - [`checkout`] - The checkout engine and its `Ledger` seam
//! - [`validation`] - Field-level input rules
//! - [`error`] - Typed errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: pricing is deterministic - same cart, same totals
//! 2. **No I/O**: the engine commits through a `Ledger` trait and never
//!    touches a file itself
//! 3. **Integer Money**: all monetary values are cents (i64) to avoid
//!    float errors; allocation residuals are assigned, never lost
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use carlot_core::catalog::Catalog;
//! use carlot_core::cart::Cart;
//! use carlot_core::checkout::CheckoutEngine;
//! use carlot_core::money::Money;
//! use carlot_core::pricing::PricingConfig;
//! use carlot_core::types::{Customer, Vehicle};
//!
//! let mut catalog = Catalog::new();
//! let corolla = Vehicle::new("Toyota", "Corolla", Money::from_cents(2_000_000));
//! let corolla_id = corolla.id.clone();
//! catalog.add_vehicle(corolla).unwrap();
//!
//! let buyer = Customer::new("Alice", 34, "12 Elm St", "555-010-2345", "a@b.com");
//! let mut cart = Cart::new();
//! cart.add(corolla_id);
//!
//! let mut engine = CheckoutEngine::new(PricingConfig::default());
//! engine.validate(&catalog, &cart, Some(&buyer)).unwrap();
//! let quote = engine.price(&catalog, &cart).unwrap();
//!
//! // $20,000 + 7% tax, below the lowest discount tier
//! assert_eq!(quote.total(), Money::from_cents(2_140_000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use carlot_core::Money` instead of
// `use carlot_core::money::Money`

pub use cart::Cart;
pub use catalog::Catalog;
pub use checkout::{CheckoutEngine, CheckoutState, Ledger};
pub use error::{CoreError, CoreResult, LedgerError, ValidationError};
pub use money::Money;
pub use pricing::{PricingConfig, Quote};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default sales tax in basis points (700 = 7%).
///
/// ## Why a constant?
/// The rate is configurable per `PricingConfig`, but every deployment so
/// far runs the statutory 7%, so the default lives here in one place.
pub const DEFAULT_TAX_RATE_BPS: u32 = 700;

/// Youngest age a customer may register with.
///
/// ## Business Reason
/// Buyers sign financing paperwork; minors cannot.
pub const MIN_CUSTOMER_AGE: u32 = 18;

/// Oldest age a customer may register with.
///
/// ## Business Reason
/// Anything above this is a typo, not a customer.
pub const MAX_CUSTOMER_AGE: u32 = 120;
