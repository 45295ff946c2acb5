//! Application Layer
//!
//! Wires configuration into domain objects.

mod catalog;

pub use catalog::{build_inventory, sample_products};
