//! # Customer Repository
//!
//! Reads and writes `customers.txt`, one customer per line:
//!
//! ```text
//! Alice Nguyen,34,12 Elm St,555-010-2345,alice@example.com
//! ```
//!
//! Free-text fields are written raw, so an address containing a comma
//! produces a line the loader cannot split back into five fields. Such
//! lines are skipped with a warning on load. TODO: quote or escape
//! commas in free-text fields and accept both forms when loading.

use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use carlot_core::Customer;

use crate::error::{StoreError, StoreResult};

/// Repository for the customer roster file.
#[derive(Debug, Clone)]
pub struct CustomerFile {
    path: PathBuf,
}

impl CustomerFile {
    /// Creates a repository over the given file path.
    pub fn new(path: PathBuf) -> Self {
        CustomerFile { path }
    }

    /// Rewrites the file with the given customers, in order.
    pub fn save(&self, customers: &[Customer]) -> StoreResult<()> {
        let mut contents = String::new();
        for customer in customers {
            contents.push_str(&render_line(customer));
            contents.push('\n');
        }

        fs::write(&self.path, contents)
            .map_err(|e| StoreError::io(self.path.display().to_string(), e))?;

        debug!(count = customers.len(), path = %self.path.display(), "Saved customers");
        Ok(())
    }

    /// Loads every parseable customer from the file.
    ///
    /// A missing file is an empty roster. Unparseable lines are skipped
    /// with a warning. Loaded customers get fresh ids, same as vehicles.
    pub fn load(&self) -> StoreResult<Vec<Customer>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let text = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::io(self.path.display().to_string(), e))?;

        let mut customers = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line, index + 1) {
                Ok(customer) => customers.push(customer),
                Err(err) => warn!(%err, "Skipping unreadable customer line"),
            }
        }

        debug!(count = customers.len(), path = %self.path.display(), "Loaded customers");
        Ok(customers)
    }
}

/// Renders `name,age,address,phone,email`.
fn render_line(customer: &Customer) -> String {
    format!(
        "{},{},{},{},{}",
        customer.name, customer.age, customer.address, customer.phone, customer.email
    )
}

/// Parses `name,age,address,phone,email`.
fn parse_line(line: &str, line_no: usize) -> StoreResult<Customer> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 5 {
        return Err(StoreError::malformed(
            "customers.txt",
            line_no,
            format!("expected 5 fields, got {}", parts.len()),
        ));
    }

    let age: u32 = parts[1]
        .trim()
        .parse()
        .map_err(|_| StoreError::malformed("customers.txt", line_no, "unparseable age"))?;

    Ok(Customer::new(
        parts[0].trim(),
        age,
        parts[2].trim(),
        parts[3].trim(),
        parts[4].trim(),
    ))
}

// =============================================================================
// Unit Tests
// =============================================================================
