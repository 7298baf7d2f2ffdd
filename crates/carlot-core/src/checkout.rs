//! # Checkout Engine
//!
//! Orchestrates a single checkout transaction over a cart and a customer.
//!
//! ## Transaction Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Checkout State Machine                              │
//! │                                                                         │
//! │            validate()        price()          commit()                  │
//! │   Idle ───────────────► Validated ───────► Priced ───────► Committed   │
//! │     │                       │                 │              (terminal) │
//! │     │                       │                 │                         │
//! │     └───────── abort() ─────┴─────────────────┘                         │
//! │                             │                                           │
//! │                             ▼                                           │
//! │                          Aborted                                        │
//! │                         (terminal)                                      │
//! │                                                                         │
//! │  Before commit touches anything: discard at will, nothing persisted.   │
//! │  Once commit starts removing vehicles: no cancellation, only the       │
//! │  partial-failure report if something breaks midway.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Stale Cart Hazard
//! A cart assembled from a listing can go stale if another menu action
//! removes one of its vehicles before checkout finishes. There is exactly
//! one logical writer, so no locking is needed; the discipline is
//! recheck-before-mutate: `validate` rechecks every item against the live
//! catalog, and `commit` rechecks again immediately before each removal,
//! failing fast with `StaleReference` instead of selling a phantom.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult, LedgerError};
use crate::money::Money;
use crate::pricing::{self, PricingConfig, Quote};
use crate::types::{Customer, SaleRecord, Vehicle};

// =============================================================================
// Ledger Trait
// =============================================================================

/// The persistence collaborator the engine commits through.
///
/// The engine defines WHAT must be durably recorded; implementations
/// decide where and how. `record_sale` is called once per sold vehicle,
/// in cart order; `persist_inventory` once per successful commit, with
/// the vehicles that remain.
pub trait Ledger {
    /// Appends one sale record. Must not overwrite prior records.
    fn record_sale(&mut self, record: &SaleRecord) -> Result<(), LedgerError>;

    /// Durably replaces the available-inventory snapshot.
    fn persist_inventory(&mut self, vehicles: &[Vehicle]) -> Result<(), LedgerError>;
}

// =============================================================================
// Checkout State
// =============================================================================

/// Where a checkout transaction currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutState {
    /// Nothing checked yet.
    Idle,
    /// Cart and customer passed validation.
    Validated,
    /// A quote has been computed.
    Priced,
    /// The sale went through. Terminal.
    Committed,
    /// Cancelled, or failed past the point of retry. Terminal.
    Aborted,
}

impl Default for CheckoutState {
    fn default() -> Self {
        CheckoutState::Idle
    }
}

// =============================================================================
// Checkout Engine
// =============================================================================

/// Drives one checkout transaction to completion.
///
/// One engine per checkout session: once `Committed` or `Aborted`, build
/// a fresh engine for the next customer. The engine owns no catalog and
/// no cart; both are lent to it per call.
#[derive(Debug, Clone, Default)]
pub struct CheckoutEngine {
    config: PricingConfig,
    state: CheckoutState,
}

impl CheckoutEngine {
    /// Creates an engine with the given pricing configuration.
    pub fn new(config: PricingConfig) -> Self {
        CheckoutEngine {
            config,
            state: CheckoutState::Idle,
        }
    }

    /// Returns the current transaction state.
    #[inline]
    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Checks the cart and customer against the live catalog.
    ///
    /// Idempotent: re-validating without intervening mutation yields the
    /// same outcome. Re-validating from `Priced` drops the quote and
    /// returns to `Validated`.
    ///
    /// ## Errors
    /// - `EmptyCart` when the cart has no items
    /// - `NoCustomer` when no customer is selected
    /// - `StaleReference` naming the first cart item missing from the
    ///   catalog
    ///
    /// On failure the state is unchanged, so the caller can fix the
    /// input and try again.
    pub fn validate(
        &mut self,
        catalog: &Catalog,
        cart: &Cart,
        customer: Option<&Customer>,
    ) -> CoreResult<()> {
        self.require_active("validate")?;

        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        if customer.is_none() {
            return Err(CoreError::NoCustomer);
        }
        for vehicle_id in cart.vehicle_ids() {
            if !catalog.contains_vehicle(vehicle_id) {
                return Err(CoreError::StaleReference {
                    vehicle_id: vehicle_id.clone(),
                });
            }
        }

        self.state = CheckoutState::Validated;
        Ok(())
    }

    /// Prices the cart against the live catalog.
    ///
    /// Re-resolves every cart item; a vehicle that disappeared since
    /// validation surfaces as `StaleReference` here rather than as a
    /// wrong total.
    pub fn price(&mut self, catalog: &Catalog, cart: &Cart) -> CoreResult<Quote> {
        match self.state {
            CheckoutState::Validated | CheckoutState::Priced => {}
            state => {
                return Err(CoreError::InvalidTransition {
                    operation: "price",
                    state,
                })
            }
        }

        let vehicles = resolve_cart(catalog, cart)?;
        let base_total: Money = vehicles.iter().map(|v| v.price()).sum();
        let quote = pricing::quote(base_total, &self.config);

        self.state = CheckoutState::Priced;
        Ok(quote)
    }

    /// Commits the transaction: allocates the quote across the carted
    /// vehicles, records one sale per vehicle, removes each from the
    /// catalog, and persists the remaining inventory.
    ///
    /// ## Failure Semantics
    /// ```text
    /// before any mutation   → typed error, state back to Validated,
    ///                         catalog and ledger untouched, retry is safe
    /// after any removal     → PartialCommit carrying every vehicle that
    ///                         left the catalog; transaction is terminal
    ///                         and the caller must reconcile
    /// ```
    ///
    /// ## Errors
    /// - `InvalidTransition` unless the state is `Priced`
    /// - `StaleReference` when a cart item vanished (nothing mutated yet)
    /// - `DegenerateCart` when the base total is zero, since a
    ///   proportional share of nothing is undefined
    /// - `Ledger` when the very first sale write fails (nothing mutated)
    /// - `PartialCommit` for any failure later than that
    pub fn commit(
        &mut self,
        catalog: &mut Catalog,
        cart: &Cart,
        customer: &Customer,
        quote: &Quote,
        ledger: &mut dyn Ledger,
    ) -> CoreResult<Vec<SaleRecord>> {
        if self.state != CheckoutState::Priced {
            return Err(CoreError::InvalidTransition {
                operation: "commit",
                state: self.state,
            });
        }

        // Fail fast while nothing has been mutated.
        let vehicles = match resolve_cart(catalog, cart) {
            Ok(vehicles) => vehicles,
            Err(err) => {
                self.state = CheckoutState::Validated;
                return Err(err);
            }
        };

        let base_total: Money = vehicles.iter().map(|v| v.price()).sum();
        if !base_total.is_positive() {
            self.state = CheckoutState::Validated;
            return Err(CoreError::DegenerateCart);
        }

        let records = allocate_records(&vehicles, customer, quote);

        // Mutation phase. From the first removal onward every failure is
        // a PartialCommit; the catalog and the ledger can no longer be
        // assumed to agree.
        let mut removed: Vec<Vehicle> = Vec::with_capacity(vehicles.len());
        for (vehicle, record) in vehicles.iter().zip(&records) {
            // Recheck immediately before mutating; an interleaved menu
            // action may have taken this vehicle since the resolve above.
            if !catalog.contains_vehicle(&vehicle.id) {
                return self.commit_failure(
                    removed,
                    CoreError::StaleReference {
                        vehicle_id: vehicle.id.clone(),
                    },
                );
            }

            if let Err(err) = ledger.record_sale(record) {
                return self.commit_failure(removed, CoreError::Ledger(err));
            }

            match catalog.remove_vehicle(&vehicle.id) {
                Ok(vehicle) => removed.push(vehicle),
                Err(_) => {
                    // The sale for this vehicle is already on the ledger,
                    // so even with no prior removal the stores disagree.
                    self.state = CheckoutState::Aborted;
                    return Err(CoreError::PartialCommit {
                        removed,
                        reason: format!(
                            "vehicle {} vanished after its sale was recorded",
                            vehicle.id
                        ),
                    });
                }
            }
        }

        if let Err(err) = ledger.persist_inventory(catalog.vehicles()) {
            self.state = CheckoutState::Aborted;
            return Err(CoreError::PartialCommit {
                removed,
                reason: err.to_string(),
            });
        }

        self.state = CheckoutState::Committed;
        Ok(records)
    }

    /// Cancels the transaction. Allowed from any non-terminal state;
    /// validated and priced work is discarded with no persisted effect.
    pub fn abort(&mut self) -> CoreResult<()> {
        self.require_active("abort")?;
        self.state = CheckoutState::Aborted;
        Ok(())
    }

    /// Rejects operations on a finished transaction.
    fn require_active(&self, operation: &'static str) -> CoreResult<()> {
        match self.state {
            CheckoutState::Committed | CheckoutState::Aborted => {
                Err(CoreError::InvalidTransition {
                    operation,
                    state: self.state,
                })
            }
            _ => Ok(()),
        }
    }

    /// Classifies a mutation-phase failure: clean retry if nothing was
    /// removed yet and the ledger was not written, terminal otherwise.
    fn commit_failure(
        &mut self,
        removed: Vec<Vehicle>,
        cause: CoreError,
    ) -> CoreResult<Vec<SaleRecord>> {
        if removed.is_empty() {
            self.state = CheckoutState::Validated;
            return Err(cause);
        }
        self.state = CheckoutState::Aborted;
        Err(CoreError::PartialCommit {
            removed,
            reason: cause.to_string(),
        })
    }
}

// =============================================================================
// Allocation
// =============================================================================

/// Resolves cart ids to catalog vehicles, in cart order.
fn resolve_cart(catalog: &Catalog, cart: &Cart) -> CoreResult<Vec<Vehicle>> {
    cart.vehicle_ids()
        .iter()
        .map(|vehicle_id| {
            catalog
                .vehicle(vehicle_id)
                .cloned()
                .ok_or_else(|| CoreError::StaleReference {
                    vehicle_id: vehicle_id.clone(),
                })
        })
        .collect()
}

/// Builds one sale record per vehicle, splitting the quote's tax,
/// discount and final total in proportion to sticker prices.
///
/// Shares come from [`Money::prorate`], so each figure's shares sum
/// exactly to the quote figure; any residual cent sits on the last
/// record.
fn allocate_records(vehicles: &[Vehicle], customer: &Customer, quote: &Quote) -> Vec<SaleRecord> {
    let weights: Vec<Money> = vehicles.iter().map(|v| v.price()).collect();
    let tax_shares = quote.tax().prorate(&weights);
    let discount_shares = quote.discount().prorate(&weights);
    let final_shares = quote.total().prorate(&weights);

    vehicles
        .iter()
        .enumerate()
        .map(|(i, vehicle)| SaleRecord {
            vehicle_brand: vehicle.brand.clone(),
            vehicle_model: vehicle.model.clone(),
            customer_name: customer.name.clone(),
            customer_email: customer.email.clone(),
            base_price_cents: vehicle.price_cents,
            tax_cents: tax_shares[i].cents(),
            discount_cents: discount_shares[i].cents(),
            final_price_cents: final_shares[i].cents(),
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
