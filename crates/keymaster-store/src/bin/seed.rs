//! # Seed Data Generator
//!
//! Populates a store directory with demo catalog data for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default directory (./keymaster_dev)
//! cargo run -p keymaster-store --bin seed
//!
//! # Specify a store directory
//! cargo run -p keymaster-store --bin seed -- --dir ./data
//! ```
//!
//! Seeding a fresh directory also creates the default admin account
//! (`admin@key.com`), courtesy of `DataStore::open`.

use std::env;

use keymaster_core::{Category, Product};
use keymaster_store::{new_record_id, DataStore};

/// Demo catalog: (name, category, price_cents, cost_cents, stock, code).
const DEMO_PRODUCTS: &[(&str, Category, i64, i64, i64, &str)] = &[
    ("Brass house key", Category::House, 1500, 400, 40, "HK-BR-01"),
    ("Steel house key", Category::House, 1200, 350, 55, "HK-ST-02"),
    ("Security dimple key", Category::House, 3500, 1200, 18, "HK-DM-03"),
    ("Car key blank (flip)", Category::Car, 4500, 1800, 25, "CK-FL-01"),
    ("Car key blank (standard)", Category::Car, 2500, 900, 30, "CK-SD-02"),
    ("Car remote shell", Category::Car, 3000, 1100, 12, "CK-RS-03"),
    ("Transponder programming", Category::Programming, 12000, 2000, 99, "PR-TP-01"),
    ("Remote pairing", Category::Programming, 8000, 1500, 99, "PR-RP-02"),
    ("Smart lock setup", Category::Programming, 15000, 3000, 99, "PR-SL-03"),
    ("Leather keychain", Category::Accessory, 900, 250, 60, "AC-KC-01"),
    ("Key cover set", Category::Accessory, 600, 150, 80, "AC-CV-02"),
    ("Carabiner clip", Category::Accessory, 400, 100, 70, "AC-CB-03"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut dir = String::from("./keymaster_dev");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--dir" | "-d" => {
                if i + 1 < args.len() {
                    dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("KeyMaster POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --dir <PATH>   Store directory (default: ./keymaster_dev)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("KeyMaster POS Seed Data Generator");
    println!("=================================");
    println!("Store directory: {}", dir);
    println!();

    let mut store = DataStore::open(&dir)?;
    println!("Store opened ({} staff records)", store.employees().len());

    if !store.products().is_empty() {
        println!("Store already has {} products", store.products().len());
        println!("Skipping seed to avoid duplicates.");
        println!("Delete {}/products.json to regenerate.", dir);
        return Ok(());
    }

    for (name, category, price_cents, cost_cents, stock, code) in DEMO_PRODUCTS {
        store.add_product(Product {
            id: new_record_id(),
            name: (*name).to_string(),
            category: *category,
            price_cents: *price_cents,
            cost_cents: *cost_cents,
            stock: *stock,
            code: (*code).to_string(),
        })?;
    }

    println!("Seeded {} products", store.products().len());
    println!();
    println!("Seed complete! Log in as admin@key.com to start selling.");

    Ok(())
}
