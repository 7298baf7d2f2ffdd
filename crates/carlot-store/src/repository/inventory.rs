//! # Inventory Repository
//!
//! Reads and writes `cars.txt`, one vehicle per line:
//!
//! ```text
//! Corolla,Toyota,20000.00
//! Civic,Honda,22500.00
//! ```
//!
//! Field order is model first, then brand, then the 2-decimal price.
//! The whole file is rewritten on save; inventory is small enough that
//! anything cleverer would cost more than it buys.

use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use carlot_core::{Money, Vehicle};

use crate::error::{StoreError, StoreResult};

/// Repository for the vehicle inventory file.
#[derive(Debug, Clone)]
pub struct InventoryFile {
    path: PathBuf,
}

impl InventoryFile {
    /// Creates a repository over the given file path.
    pub fn new(path: PathBuf) -> Self {
        InventoryFile { path }
    }

    /// Rewrites the file with the given vehicles, in order.
    pub fn save(&self, vehicles: &[Vehicle]) -> StoreResult<()> {
        let mut contents = String::new();
        for vehicle in vehicles {
            contents.push_str(&render_line(vehicle));
            contents.push('\n');
        }

        fs::write(&self.path, contents)
            .map_err(|e| StoreError::io(self.path.display().to_string(), e))?;

        debug!(count = vehicles.len(), path = %self.path.display(), "Saved inventory");
        Ok(())
    }

    /// Loads every parseable vehicle from the file.
    ///
    /// A missing file is an empty inventory, not an error. Unparseable
    /// lines are skipped with a warning; one corrupt record must not
    /// take the lot offline.
    ///
    /// Loaded vehicles get fresh ids: the file format predates ids and
    /// identity only has to hold within one process run.
    pub fn load(&self) -> StoreResult<Vec<Vehicle>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let text = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::io(self.path.display().to_string(), e))?;

        let mut vehicles = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line, index + 1) {
                Ok(vehicle) => vehicles.push(vehicle),
                Err(err) => warn!(%err, "Skipping unreadable inventory line"),
            }
        }

        debug!(count = vehicles.len(), path = %self.path.display(), "Loaded inventory");
        Ok(vehicles)
    }
}

/// Renders `model,brand,price`.
fn render_line(vehicle: &Vehicle) -> String {
    format!(
        "{},{},{}",
        vehicle.model,
        vehicle.brand,
        vehicle.price().decimal_string()
    )
}

/// Parses `model,brand,price`.
fn parse_line(line: &str, line_no: usize) -> StoreResult<Vehicle> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 3 {
        return Err(StoreError::malformed(
            "cars.txt",
            line_no,
            format!("expected 3 fields, got {}", parts.len()),
        ));
    }

    let price: Money = parts[2]
        .trim()
        .parse()
        .map_err(|_| StoreError::malformed("cars.txt", line_no, "unparseable price"))?;
    if !price.is_positive() {
        return Err(StoreError::malformed(
            "cars.txt",
            line_no,
            "price must be positive",
        ));
    }

    Ok(Vehicle::new(parts[1].trim(), parts[0].trim(), price))
}

// =============================================================================
// Unit Tests
// =============================================================================
