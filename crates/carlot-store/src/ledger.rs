//! # File Ledger
//!
//! The checkout engine's `Ledger` collaborator, backed by the flat
//! files.
//!
//! ## Commit Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CheckoutEngine::commit                                                 │
//! │       │                                                                 │
//! │       ├── record_sale(record)  ──► sales.txt      (append, per item)   │
//! │       │        ... once per carted vehicle, in cart order ...          │
//! │       │                                                                 │
//! │       └── persist_inventory(…) ──► cars.txt       (rewrite, once)      │
//! │                                                                         │
//! │  The two writes are independent and unguarded. If the second fails     │
//! │  after the first succeeded, the engine reports PartialCommit with      │
//! │  the removed vehicles; this layer never hides a failed write.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;

use carlot_core::{Ledger, LedgerError, SaleRecord, Vehicle};

use crate::repository::inventory::InventoryFile;
use crate::repository::sales::SalesLog;

/// Flat-file implementation of the core's `Ledger` trait.
#[derive(Debug, Clone)]
pub struct FileLedger {
    sales: SalesLog,
    inventory: InventoryFile,
}

impl FileLedger {
    /// Creates a ledger over the given sales log and inventory file.
    pub fn new(sales: SalesLog, inventory: InventoryFile) -> Self {
        FileLedger { sales, inventory }
    }
}

impl Ledger for FileLedger {
    fn record_sale(&mut self, record: &SaleRecord) -> Result<(), LedgerError> {
        self.sales.append(record)?;
        info!(
            vehicle = %format!("{} {}", record.vehicle_brand, record.vehicle_model),
            customer = %record.customer_name,
            amount = %record.final_price(),
            "Sale recorded"
        );
        Ok(())
    }

    fn persist_inventory(&mut self, vehicles: &[Vehicle]) -> Result<(), LedgerError> {
        self.inventory.save(vehicles)?;
        info!(remaining = vehicles.len(), "Inventory persisted");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use carlot_core::{Cart, Catalog, CheckoutEngine, Money, PricingConfig};

    use crate::store::Store;

    #[test]
    fn test_checkout_through_file_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        // A lot of three; two get sold
        let mut catalog = Catalog::new();
        let x5 = carlot_core::Vehicle::new("BMW", "X5", Money::from_cents(6_000_000));
        let q7 = carlot_core::Vehicle::new("Audi", "Q7", Money::from_cents(5_000_000));
        let corolla = carlot_core::Vehicle::new("Toyota", "Corolla", Money::from_cents(2_000_000));
        let (x5_id, q7_id) = (x5.id.clone(), q7.id.clone());
        catalog.add_vehicle(x5).unwrap();
        catalog.add_vehicle(q7).unwrap();
        catalog.add_vehicle(corolla).unwrap();

        let buyer = carlot_core::Customer::new(
            "Alice Nguyen",
            34,
            "12 Elm St",
            "555-010-2345",
            "alice@example.com",
        );

        let mut cart = Cart::new();
        cart.add(x5_id);
        cart.add(q7_id);

        let mut engine = CheckoutEngine::new(PricingConfig::default());
        engine.validate(&catalog, &cart, Some(&buyer)).unwrap();
        let quote = engine.price(&catalog, &cart).unwrap();

        let mut ledger = store.ledger();
        let records = engine
            .commit(&mut catalog, &cart, &buyer, &quote, &mut ledger)
            .unwrap();
        assert_eq!(records.len(), 2);

        // Sales log has one line per sold vehicle, in cart order
        let sales = fs::read_to_string(dir.path().join("sales.txt")).unwrap();
        let lines: Vec<&str> = sales.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "BMW,X5,Alice Nguyen,alice@example.com,60000.00,4200.00,12840.00,51360.00"
        );
        assert_eq!(
            lines[1],
            "Audi,Q7,Alice Nguyen,alice@example.com,50000.00,3500.00,10700.00,42800.00"
        );

        // Inventory file reflects the removals
        let cars = fs::read_to_string(dir.path().join("cars.txt")).unwrap();
        assert_eq!(cars, "Corolla,Toyota,20000.00\n");
    }
}
