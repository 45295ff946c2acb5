//! Domain Entities
//!
//! - `Product` - A single catalog entry (food or electronics)
//! - `Inventory` - The ordered collection that owns every product

mod inventory;
mod product;

pub use inventory::{Inventory, Listing, RemoveOutcome, SearchOutcome, DIVIDER};
pub use product::{Product, ProductKind};
