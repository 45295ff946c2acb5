//! Configuration module for Stockroom
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (STOCKROOM_*)
//! 3. Explicit `--config` file, else `./stockroom.toml`
//! 4. User config (`<config dir>/stockroom/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{CatalogConfig, ColorMode, Config, OutputConfig, ProductSpec, Verbosity};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "stockroom.toml";
