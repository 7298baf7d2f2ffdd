//! # Seed Data Generator
//!
//! Populates the data directory with a sample lot and customer roster
//! for development.
//!
//! ## Usage
//! ```bash
//! # Seed 30 vehicles (default) into ./data
//! cargo run -p carlot-store --bin seed
//!
//! # Custom amount and directory
//! cargo run -p carlot-store --bin seed -- --count 50 --data ./demo-data
//! ```
//!
//! ## Generated Data
//! - A dealership profile (unless one already exists)
//! - Vehicles cycled from a fixed brand/model lineup with deterministic
//!   price variation per slot
//! - A small fixed customer roster (unless customers already exist)
//!
//! Seeding is skipped when the inventory file already has vehicles, so
//! a development data directory is never clobbered.

use std::env;

use carlot_core::{Customer, DealershipProfile, Money, Vehicle};
use carlot_store::Store;

/// Brand lineup with per-model base prices in whole dollars.
const LINEUP: &[(&str, &[(&str, i64)])] = &[
    (
        "Toyota",
        &[
            ("Corolla", 20_000),
            ("Camry", 28_000),
            ("RAV4", 32_000),
            ("Highlander", 41_000),
        ],
    ),
    (
        "Honda",
        &[
            ("Civic", 22_500),
            ("Accord", 29_000),
            ("CR-V", 33_000),
            ("Pilot", 40_500),
        ],
    ),
    (
        "Ford",
        &[
            ("Focus", 19_500),
            ("Escape", 30_000),
            ("Explorer", 38_500),
            ("F-150", 45_000),
        ],
    ),
    (
        "BMW",
        &[
            ("3 Series", 45_500),
            ("5 Series", 58_000),
            ("X3", 49_000),
            ("X5", 66_000),
        ],
    ),
    (
        "Audi",
        &[
            ("A4", 42_500),
            ("A6", 57_500),
            ("Q5", 46_500),
            ("Q7", 60_000),
        ],
    ),
];

/// Fixed development roster: (name, age, address, phone, email).
const ROSTER: &[(&str, u32, &str, &str, &str)] = &[
    (
        "Alice Nguyen",
        34,
        "12 Elm St",
        "555-010-2345",
        "alice@example.com",
    ),
    (
        "Bob Ortiz",
        52,
        "9 Oak Ave",
        "555-010-9876",
        "bob@example.com",
    ),
    (
        "Chandra Patel",
        41,
        "77 Birch Rd",
        "555-010-4411",
        "chandra@example.com",
    ),
    (
        "Dana Kim",
        27,
        "3 Maple Ct",
        "555-010-7788",
        "dana@example.com",
    ),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 30;
    let mut data_dir = String::from("./data");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(30);
                    i += 1;
                }
            }
            "--data" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Carlot Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of vehicles to generate (default: 30)");
                println!("  -d, --data <PATH>  Data directory path (default: ./data)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Carlot Seed Data Generator");
    println!("=============================");
    println!("Data directory: {}", data_dir);
    println!("Vehicles: {}", count);
    println!();

    let store = Store::open(&data_dir)?;
    println!("✓ Opened data directory");

    // Never clobber an existing lot
    let existing = store.inventory().load()?;
    if !existing.is_empty() {
        println!("⚠ Inventory already has {} vehicles", existing.len());
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete cars.txt to regenerate.");
        return Ok(());
    }

    // Profile, unless the store is already configured
    if store.profile().load()?.is_none() {
        store.profile().save(&DealershipProfile {
            name: "Hilltop Motors".to_string(),
            location: "Springfield".to_string(),
        })?;
        println!("✓ Wrote dealership profile");
    }

    // Cycle through the lineup until we have enough vehicles
    let mut vehicles = Vec::with_capacity(count);
    let mut seed = 0usize;
    'outer: loop {
        for (brand, models) in LINEUP {
            for (model, base_dollars) in *models {
                if vehicles.len() >= count {
                    break 'outer;
                }

                // Deterministic price variation per slot, up to $4,000
                let dollars = base_dollars + ((seed * 171) % 4_000) as i64;
                vehicles.push(Vehicle::new(
                    *brand,
                    *model,
                    Money::from_major_minor(dollars, 0),
                ));
                seed += 1;
            }
        }
    }
    store.inventory().save(&vehicles)?;
    println!("✓ Generated {} vehicles", vehicles.len());

    // Roster, unless customers already exist
    let existing_customers = store.customers().load()?;
    if existing_customers.is_empty() {
        let customers: Vec<Customer> = ROSTER
            .iter()
            .map(|(name, age, address, phone, email)| {
                Customer::new(*name, *age, *address, *phone, *email)
            })
            .collect();
        store.customers().save(&customers)?;
        println!("✓ Registered {} customers", customers.len());
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
