//! # Repository Implementations
//!
//! One repository per data file. Rewrite-on-save for the snapshot files
//! (inventory, customers, profile), append-only for the logs (sales,
//! testimonies).

pub mod customers;
pub mod inventory;
pub mod profile;
pub mod sales;
pub mod testimonies;
