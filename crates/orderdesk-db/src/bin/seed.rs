//! # Seed Data Generator
//!
//! Populates the reference catalog (customers, products) for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 customers and 500 products (defaults)
//! cargo run -p orderdesk-db --bin seed
//!
//! # Custom amounts
//! cargo run -p orderdesk-db --bin seed -- --customers 50 --products 100
//!
//! # Specify database path
//! cargo run -p orderdesk-db --bin seed -- --db ./data/orderdesk.db
//! ```
//!
//! Codes are deterministic (`C0001`, `P0001`, ...) so lookups page the same
//! way on every regenerated database.

use std::env;

use orderdesk_core::{Customer, Product};
use orderdesk_db::{Database, DbConfig};
use tracing_subscriber::EnvFilter;

/// Company name fragments for customer generation.
const COMPANY_HEADS: &[&str] = &[
    "Acme", "Apex", "Atlas", "Beacon", "Cascade", "Delta", "Everest", "Fulcrum", "Granite",
    "Harbor", "Ironwood", "Juniper", "Keystone", "Lakeside", "Meridian", "Northwind", "Orchard",
    "Pinnacle", "Quarry", "Redwood", "Summit", "Trellis", "Union", "Vanguard", "Westfield",
];

const COMPANY_TAILS: &[&str] = &[
    "Corp", "Ltd", "Industries", "Holdings", "Trading", "Supply", "Group", "Partners",
];

/// Product name fragments.
const PRODUCT_HEADS: &[&str] = &[
    "Widget", "Gasket", "Bracket", "Flange", "Bearing", "Coupler", "Sprocket", "Valve", "Washer",
    "Bolt", "Clamp", "Hinge", "Pulley", "Spindle", "Grommet",
];

const PRODUCT_TAILS: &[&str] = &["Standard", "Heavy Duty", "Compact", "Pro", "Mini"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut customer_count: usize = 200;
    let mut product_count: usize = 500;
    let mut db_path = String::from("./orderdesk_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--customers" | "-c" => {
                if i + 1 < args.len() {
                    customer_count = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "--products" | "-p" => {
                if i + 1 < args.len() {
                    product_count = args[i + 1].parse().unwrap_or(500);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Orderdesk Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --customers <N>  Number of customers to generate (default: 200)");
                println!("  -p, --products <N>   Number of products to generate (default: 500)");
                println!("  -d, --db <PATH>      Database file path (default: ./orderdesk_dev.db)");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Orderdesk Seed Data Generator");
    println!("=============================");
    println!("Database:  {}", db_path);
    println!("Customers: {}", customer_count);
    println!("Products:  {}", product_count);
    println!();

    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("Connected, migrations applied");

    let existing = db.customers().count().await? + db.products().count().await?;
    if existing > 0 {
        println!("Database already has {} reference rows", existing);
        println!("Skipping seed to avoid duplicate codes.");
        println!("Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating customers...");
    for i in 0..customer_count {
        let customer = generate_customer(i);
        if let Err(e) = db.customers().insert(&customer).await {
            eprintln!("Failed to insert {}: {}", customer.customer_code, e);
        }
    }

    println!("Generating products...");
    for i in 0..product_count {
        let product = generate_product(i);
        if let Err(e) = db.products().insert(&product).await {
            eprintln!("Failed to insert {}: {}", product.product_code, e);
        }
    }

    println!();
    println!(
        "Seed complete: {} customers, {} products",
        db.customers().count().await?,
        db.products().count().await?
    );

    // Smoke-check the lookup path against the fresh data
    let page = db.customers().lookup(Some("a"), 1).await?;
    println!(
        "Lookup 'a': {} rows on page 1 of {}",
        page.num_rows, page.total_pages
    );

    Ok(())
}

/// Generates a single customer with a deterministic code.
fn generate_customer(seed: usize) -> Customer {
    let head = COMPANY_HEADS[seed % COMPANY_HEADS.len()];
    let tail = COMPANY_TAILS[(seed / COMPANY_HEADS.len()) % COMPANY_TAILS.len()];

    Customer {
        customer_code: format!("C{:04}", seed + 1),
        customer_name: format!("{} {}", head, tail),
    }
}

/// Generates a single product with a deterministic code and price.
fn generate_product(seed: usize) -> Product {
    let head = PRODUCT_HEADS[seed % PRODUCT_HEADS.len()];
    let tail = PRODUCT_TAILS[(seed / PRODUCT_HEADS.len()) % PRODUCT_TAILS.len()];

    // Price: $0.50 - $80.49 in deterministic steps
    let price = 0.5 + ((seed * 17) % 8000) as f64 / 100.0;

    Product {
        product_code: format!("P{:04}", seed + 1),
        product_name: format!("{} {}", head, tail),
        product_price: price,
    }
}
