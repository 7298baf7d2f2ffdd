//! # Store Handle
//!
//! Data directory management and repository access.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Store Data Directory                              │
//! │                                                                         │
//! │  Application Startup                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::open("data") ← creates the directory if missing                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │               data/                      │                           │
//! │  │  cars.txt         ◄── inventory()        │                           │
//! │  │  customers.txt    ◄── customers()        │                           │
//! │  │  dealership.txt   ◄── profile()          │                           │
//! │  │  sales.txt        ◄── sales()            │                           │
//! │  │  testimonies.txt  ◄── testimonies()      │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ledger() bundles sales() + inventory() behind the core's              │
//! │  Ledger trait for the checkout engine                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Plain line-oriented text files, rewritten whole on save (except the
//! append-only logs). At this data volume a rewrite is cheaper than any
//! structure that would avoid it.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::ledger::FileLedger;
use crate::repository::customers::CustomerFile;
use crate::repository::inventory::InventoryFile;
use crate::repository::profile::ProfileFile;
use crate::repository::sales::SalesLog;
use crate::repository::testimonies::TestimonyLog;

// =============================================================================
// File Names
// =============================================================================

/// Inventory file name inside the data directory.
pub const CARS_FILE: &str = "cars.txt";
/// Customer roster file name.
pub const CUSTOMERS_FILE: &str = "customers.txt";
/// Dealership profile file name.
pub const DEALERSHIP_FILE: &str = "dealership.txt";
/// Append-only sales log file name.
pub const SALES_FILE: &str = "sales.txt";
/// Append-only testimonies log file name.
pub const TESTIMONIES_FILE: &str = "testimonies.txt";

// =============================================================================
// Store
// =============================================================================

/// Handle to the data directory, providing repository access.
///
/// ## Usage
/// ```rust,no_run
/// use carlot_store::Store;
///
/// let store = Store::open("data").unwrap();
/// let vehicles = store.inventory().load().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Opens a store rooted at the given directory, creating the
    /// directory (and parents) if it does not exist.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::io(root.display().to_string(), e))?;

        info!(path = %root.display(), "Opened data directory");
        Ok(Store { root })
    }

    /// Returns the data directory path.
    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the inventory repository (`cars.txt`).
    pub fn inventory(&self) -> InventoryFile {
        InventoryFile::new(self.root.join(CARS_FILE))
    }

    /// Returns the customer repository (`customers.txt`).
    pub fn customers(&self) -> CustomerFile {
        CustomerFile::new(self.root.join(CUSTOMERS_FILE))
    }

    /// Returns the dealership profile repository (`dealership.txt`).
    pub fn profile(&self) -> ProfileFile {
        ProfileFile::new(self.root.join(DEALERSHIP_FILE))
    }

    /// Returns the append-only sales log (`sales.txt`).
    pub fn sales(&self) -> SalesLog {
        SalesLog::new(self.root.join(SALES_FILE))
    }

    /// Returns the append-only testimony log (`testimonies.txt`).
    pub fn testimonies(&self) -> TestimonyLog {
        TestimonyLog::new(self.root.join(TESTIMONIES_FILE))
    }

    /// Returns a ledger for the checkout engine, bundling the sales log
    /// and the inventory file.
    pub fn ledger(&self) -> FileLedger {
        FileLedger::new(self.sales(), self.inventory())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("data");

        let store = Store::open(&root).unwrap();
        assert!(root.is_dir());
        assert_eq!(store.root(), root);
    }

    #[test]
    fn test_open_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        Store::open(dir.path()).unwrap();
        Store::open(dir.path()).unwrap();
    }
}
