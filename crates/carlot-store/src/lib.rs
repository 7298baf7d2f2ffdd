//! # carlot-store: Flat-File Persistence for Carlot
//!
//! This crate owns the data directory: the vehicle inventory, the
//! customer roster, the dealership profile, the append-only sales log
//! and the testimony log, all as plain line-oriented text files.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Carlot Data Flow                                 │
//! │                                                                         │
//! │  Interaction layer (load at startup, save after changes)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   carlot-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │     Store     │    │  Repositories │    │  FileLedger  │  │   │
//! │  │   │  (store.rs)   │    │ inventory.rs  │    │ (ledger.rs)  │  │   │
//! │  │   │               │    │ customers.rs  │    │              │  │   │
//! │  │   │ data dir      │◄───│ sales.rs      │◄───│ core Ledger  │  │   │
//! │  │   │ management    │    │ profile.rs    │    │ trait impl   │  │   │
//! │  │   └───────────────┘    │ testimonies.rs│    └──────────────┘  │   │
//! │  │                        └───────────────┘                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  data/cars.txt, customers.txt, dealership.txt, sales.txt, ...          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Data directory handle and repository access
//! - [`repository`] - Per-file repositories
//! - [`ledger`] - `FileLedger`, the checkout engine's collaborator
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use carlot_store::Store;
//!
//! let store = Store::open("data").unwrap();
//!
//! // Load state at startup
//! let vehicles = store.inventory().load().unwrap();
//! let customers = store.customers().load().unwrap();
//!
//! // Hand the ledger to the checkout engine at commit time
//! let mut ledger = store.ledger();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use ledger::FileLedger;
pub use store::Store;

// Repository re-exports for convenience
pub use repository::customers::CustomerFile;
pub use repository::inventory::InventoryFile;
pub use repository::profile::ProfileFile;
pub use repository::sales::SalesLog;
pub use repository::testimonies::{Testimony, TestimonyLog};
