//! Startup catalog

use tracing::info;

use crate::config::CatalogConfig;
use crate::domain::entities::{Inventory, Product};

/// The sample products every fresh session starts with.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::food("Apple", "Fruits", 1.99, 100, 1, "2023-05-20"),
        Product::electronics("Phone", "Electronics", 499.99, 20, 2, "Apple"),
        Product::electronics("laptop", "Electronics", 899.99, 15, 3, "HP"),
        Product::food("Cheese", "Dairy products", 15.0, 50, 4, "2023-04-11"),
    ]
}

/// Build the startup inventory: samples (if enabled), then configured products.
pub fn build_inventory(catalog: &CatalogConfig) -> Inventory {
    let mut inventory = Inventory::new();

    if catalog.seed {
        inventory.extend(sample_products());
    }
    inventory.extend(catalog.products.iter().map(|spec| spec.to_product()));

    info!(
        products = inventory.len(),
        seeded = catalog.seed,
        "catalog ready"
    );
    inventory
}
