//! Property tests for Stockroom.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/inventory.rs"]
mod inventory;
