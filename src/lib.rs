//! Stockroom - in-memory inventory catalog manager
//!
//! Stockroom keeps a small catalog of typed products (food, electronics) in
//! memory and supports adding, removing, searching, listing and sorting them.
//! The `stockroom` binary wraps the catalog in an interactive menu.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use application::{build_inventory, sample_products};
pub use config::Config;
pub use domain::entities::{Inventory, Listing, Product, ProductKind, RemoveOutcome, SearchOutcome};
pub use error::{StockroomError, StockroomResult};
