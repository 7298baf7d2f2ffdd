//! # Catalog
//!
//! The authoritative in-memory set of available vehicles and registered
//! customers.
//!
//! ## Ownership Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Who Owns What                                       │
//! │                                                                         │
//! │  Interaction layer (menu/form handlers)                                │
//! │       │                                                                 │
//! │       │ owns, passes &mut                                              │
//! │       ▼                                                                 │
//! │  Catalog ◄──── reads ──── CheckoutEngine.validate / price              │
//! │       ▲                                                                 │
//! │       └────── removals ── CheckoutEngine.commit                        │
//! │                                                                         │
//! │  No globals, no ambient singletons. Whoever drives the session         │
//! │  owns the catalog and lends it out.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Vehicles keep insertion order; listings never reorder
//! - A removed vehicle is gone: subsequent listings and lookups miss it
//! - Identity is the `id` field, never brand/model/price equality

use crate::error::{CoreError, CoreResult};
use crate::types::{Customer, DealershipProfile, Vehicle};

/// Current inventory and customer roster for a single dealership.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    profile: DealershipProfile,
    vehicles: Vec<Vehicle>,
    customers: Vec<Customer>,
}

impl Catalog {
    /// Creates an empty catalog with the default profile.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Creates an empty catalog for a named dealership.
    pub fn with_profile(profile: DealershipProfile) -> Self {
        Catalog {
            profile,
            vehicles: Vec::new(),
            customers: Vec::new(),
        }
    }

    /// Returns the dealership profile.
    #[inline]
    pub fn profile(&self) -> &DealershipProfile {
        &self.profile
    }

    /// Replaces the dealership profile.
    pub fn set_profile(&mut self, profile: DealershipProfile) {
        self.profile = profile;
    }

    // -------------------------------------------------------------------------
    // Vehicles
    // -------------------------------------------------------------------------

    /// Adds a vehicle to the inventory.
    ///
    /// The validation layer checks prices before input ever becomes a
    /// `Vehicle`, but the catalog still refuses non-positive prices on
    /// its own: a zero-priced vehicle would poison proportional
    /// allocation at checkout.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> CoreResult<()> {
        if vehicle.price_cents <= 0 {
            return Err(CoreError::InvalidVehicle {
                reason: format!(
                    "price must be positive, got {}",
                    vehicle.price()
                ),
            });
        }
        self.vehicles.push(vehicle);
        Ok(())
    }

    /// Removes a vehicle by identity and returns it.
    ///
    /// Fails with `NotFound` if no vehicle with that id is present.
    pub fn remove_vehicle(&mut self, vehicle_id: &str) -> CoreResult<Vehicle> {
        match self.vehicles.iter().position(|v| v.id == vehicle_id) {
            Some(index) => Ok(self.vehicles.remove(index)),
            None => Err(CoreError::NotFound {
                vehicle_id: vehicle_id.to_string(),
            }),
        }
    }

    /// Returns the currently available vehicles in insertion order.
    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Looks up a vehicle by id.
    pub fn vehicle(&self, vehicle_id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == vehicle_id)
    }

    /// Checks whether a vehicle id is currently present.
    pub fn contains_vehicle(&self, vehicle_id: &str) -> bool {
        self.vehicle(vehicle_id).is_some()
    }

    /// Test-only door that skips the price check, so engine tests can
    /// exercise the degenerate-cart defense with a zero-priced vehicle.
    #[cfg(test)]
    pub(crate) fn insert_unchecked(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    // -------------------------------------------------------------------------
    // Customers
    // -------------------------------------------------------------------------

    /// Registers a customer. There is no removal: the roster only grows.
    pub fn add_customer(&mut self, customer: Customer) {
        self.customers.push(customer);
    }

    /// Returns the registered customers in registration order.
    #[inline]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Looks up a customer by id.
    pub fn customer(&self, customer_id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == customer_id)
    }

    /// Case-insensitive search over name, email and phone.
    ///
    /// An empty query matches everyone, which is what a search box
    /// showing the full roster expects.
    pub fn search_customers(&self, query: &str) -> Vec<&Customer> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.customers.iter().collect();
        }
        self.customers
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.email.to_lowercase().contains(&needle)
                    || c.phone.contains(&needle)
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn vehicle(brand: &str, model: &str, dollars: i64) -> Vehicle {
        Vehicle::new(brand, model, Money::from_major_minor(dollars, 0))
    }

    #[test]
    fn test_add_and_list_keeps_insertion_order() {
        let mut catalog = Catalog::new();
        let a = vehicle("Toyota", "Corolla", 20_000);
        let b = vehicle("Honda", "Civic", 22_000);
        let c = vehicle("Ford", "F-150", 45_000);

        catalog.add_vehicle(a.clone()).unwrap();
        catalog.add_vehicle(b.clone()).unwrap();
        catalog.add_vehicle(c.clone()).unwrap();

        let ids: Vec<&str> = catalog.vehicles().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec![a.id.as_str(), b.id.as_str(), c.id.as_str()]);
    }

    #[test]
    fn test_remove_excludes_from_listing() {
        let mut catalog = Catalog::new();
        let a = vehicle("Toyota", "Corolla", 20_000);
        let b = vehicle("Honda", "Civic", 22_000);
        catalog.add_vehicle(a.clone()).unwrap();
        catalog.add_vehicle(b.clone()).unwrap();

        let removed = catalog.remove_vehicle(&a.id).unwrap();
        assert_eq!(removed.id, a.id);

        assert!(!catalog.contains_vehicle(&a.id));
        assert_eq!(catalog.vehicles().len(), 1);
        assert_eq!(catalog.vehicles()[0].id, b.id);
    }

    #[test]
    fn test_remove_missing_vehicle_is_not_found() {
        let mut catalog = Catalog::new();
        let err = catalog.remove_vehicle("no-such-id").unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[test]
    fn test_rejects_non_positive_price() {
        let mut catalog = Catalog::new();

        let free = Vehicle::new("Junk", "Heap", Money::zero());
        let err = catalog.add_vehicle(free).unwrap_err();
        assert!(matches!(err, CoreError::InvalidVehicle { .. }));

        let negative = Vehicle::new("Junk", "Heap", Money::from_cents(-100));
        assert!(catalog.add_vehicle(negative).is_err());

        assert!(catalog.vehicles().is_empty());
    }

    #[test]
    fn test_identity_not_value() {
        let mut catalog = Catalog::new();
        let a = vehicle("Toyota", "Corolla", 20_000);
        let twin = vehicle("Toyota", "Corolla", 20_000);
        catalog.add_vehicle(a.clone()).unwrap();
        catalog.add_vehicle(twin.clone()).unwrap();

        // Removing one identical twin leaves the other in place
        catalog.remove_vehicle(&a.id).unwrap();
        assert!(catalog.contains_vehicle(&twin.id));
    }

    #[test]
    fn test_customer_roster_and_search() {
        let mut catalog = Catalog::new();
        catalog.add_customer(Customer::new(
            "Alice Nguyen",
            34,
            "12 Elm St",
            "555-010-2345",
            "alice@example.com",
        ));
        catalog.add_customer(Customer::new(
            "Bob Ortiz",
            52,
            "9 Oak Ave",
            "555-010-9876",
            "bob@example.com",
        ));

        assert_eq!(catalog.customers().len(), 2);

        let hits = catalog.search_customers("ALICE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Alice Nguyen");

        let hits = catalog.search_customers("9876");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Bob Ortiz");

        assert_eq!(catalog.search_customers("").len(), 2);
        assert!(catalog.search_customers("zzz").is_empty());
    }
}
