//! # Sales Repository
//!
//! Appends to `sales.txt`, one line per vehicle sold:
//!
//! ```text
//! BMW,X5,Alice Nguyen,alice@example.com,60000.00,4200.00,12840.00,51360.00
//! ```
//!
//! Fields: brand, model, customer name, customer email, base price,
//! allocated tax, allocated discount, allocated final price.
//!
//! The log is append-only. Nothing in the system ever rewrites or
//! deletes a sale line; reconciliation tooling reads the file directly.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

use carlot_core::SaleRecord;

use crate::error::{StoreError, StoreResult};

/// Append-only repository for the sales log.
#[derive(Debug, Clone)]
pub struct SalesLog {
    path: PathBuf,
}

impl SalesLog {
    /// Creates a repository over the given file path.
    pub fn new(path: PathBuf) -> Self {
        SalesLog { path }
    }

    /// Appends one sale record, creating the file on first write.
    pub fn append(&self, record: &SaleRecord) -> StoreResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io(self.path.display().to_string(), e))?;

        writeln!(file, "{}", render_line(record))
            .map_err(|e| StoreError::io(self.path.display().to_string(), e))?;

        debug!(
            vehicle = %format!("{} {}", record.vehicle_brand, record.vehicle_model),
            amount = %record.final_price(),
            "Recorded sale"
        );
        Ok(())
    }
}

/// Renders one sale line; all amounts with exactly two decimals.
fn render_line(record: &SaleRecord) -> String {
    format!(
        "{},{},{},{},{},{},{},{}",
        record.vehicle_brand,
        record.vehicle_model,
        record.customer_name,
        record.customer_email,
        record.base_price().decimal_string(),
        record.tax().decimal_string(),
        record.discount().decimal_string(),
        record.final_price().decimal_string(),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
