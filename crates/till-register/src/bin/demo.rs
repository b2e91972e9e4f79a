//! # Register Demo
//!
//! Drives a full register session against a small sample catalog and
//! prints the cart and receipt as JSON at each step.
//!
//! ## Usage
//! ```bash
//! cargo run -p till-register --bin demo
//!
//! # With debug logging
//! RUST_LOG=debug cargo run -p till-register --bin demo
//! ```

use till_core::{Catalog, CatalogItem, Inventory, Money};
use till_register::Register;
use tracing_subscriber::EnvFilter;

/// Sample catalog: (id, name, category, unit price cents, stock, sold by weight)
const ITEMS: &[(&str, &str, &str, i64, i64, bool)] = &[
    ("apple-01", "Apples Royal Gala", "Produce", 299, 150, false),
    ("banana-01", "Bananas", "Produce", 149, 200, false),
    ("soda-01", "Cola 330ml", "Beverages", 199, 48, false),
    ("water-01", "Still Water 1L", "Beverages", 99, 120, false),
    ("bread-01", "Sourdough Loaf", "Bakery", 449, 12, false),
    ("beef-01", "Minced Beef", "Meat", 999, 50_000, true),
    ("cheese-01", "Aged Cheddar", "Deli", 2450, 8_000, true),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("Till Register Demo");
    println!("==================");
    println!();

    let catalog = Catalog::from_items(
        ITEMS
            .iter()
            .map(|&(id, name, category, price, stock, by_weight)| {
                if by_weight {
                    CatalogItem::weighed(id, name, category, Money::from_cents(price), stock)
                } else {
                    CatalogItem::counted(id, name, category, Money::from_cents(price), stock)
                }
            })
            .collect(),
    );

    let mut register = Register::new(catalog);
    println!("✓ Register opened with {} items", register.catalog().len());

    // Search the way a cashier would
    let hits = register.search("cola")?;
    println!("✓ Search 'cola': {} result(s)", hits.len());

    // Ring up a basket
    register.add_to_cart("apple-01", 3)?;
    register.add_to_cart("soda-01", 2)?;
    register.add_to_cart("bread-01", 1)?;

    // Deli scale printed $25.00 of minced beef at $9.99/kg
    register.add_weighed_to_cart("beef-01", 2500)?;

    // Customer changed their mind about one soda
    let view = register.update_line("soda-01", 1)?;
    println!();
    println!("Cart before payment:");
    println!("{}", serde_json::to_string_pretty(&view)?);

    // Pay
    let receipt = register.checkout()?;
    println!();
    println!("Receipt:");
    println!("{}", serde_json::to_string_pretty(&receipt)?);

    println!();
    println!(
        "✓ Sale {} complete, takings {}",
        receipt.sale_id,
        register.sales().takings()
    );
    println!(
        "✓ Apples remaining: {:?}",
        register.stock().stock_on_hand("apple-01")
    );

    Ok(())
}
