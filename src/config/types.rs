//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::Product;
use crate::domain::value_objects::{Price, DEFAULT_CURRENCY};
use crate::error::StockroomResult;

use super::loader::{self, ConfigWarning};

/// Catalog bootstrap configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Start with the built-in sample products
    #[serde(default = "default_true")]
    pub seed: bool,

    /// Extra products added at startup, after the samples
    #[serde(default)]
    pub products: Vec<ProductSpec>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed: true,
            products: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// A product declared in `[[catalog.products]]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProductSpec {
    Food {
        name: String,
        category: String,
        price: f64,
        quantity: i64,
        id: i64,
        expiry_date: String,
    },
    Electronics {
        name: String,
        category: String,
        price: f64,
        quantity: i64,
        id: i64,
        brand: String,
    },
}

impl ProductSpec {
    pub fn name(&self) -> &str {
        match self {
            ProductSpec::Food { name, .. } | ProductSpec::Electronics { name, .. } => name,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            ProductSpec::Food { id, .. } | ProductSpec::Electronics { id, .. } => *id,
        }
    }

    pub fn price(&self) -> Price {
        match self {
            ProductSpec::Food { price, .. } | ProductSpec::Electronics { price, .. } => {
                Price::new(*price)
            }
        }
    }

    pub fn to_product(&self) -> Product {
        match self {
            ProductSpec::Food {
                name,
                category,
                price,
                quantity,
                id,
                expiry_date,
            } => Product::food(
                name.as_str(),
                category.as_str(),
                *price,
                *quantity,
                *id,
                expiry_date.as_str(),
            ),
            ProductSpec::Electronics {
                name,
                category,
                price,
                quantity,
                id,
                brand,
            } => Product::electronics(
                name.as_str(),
                category.as_str(),
                *price,
                *quantity,
                *id,
                brand.as_str(),
            ),
        }
    }
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Prefix printed before prices
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default)]
    pub verbosity: Verbosity,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            color: ColorMode::default(),
            verbosity: Verbosity::default(),
        }
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// Full configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StockroomResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Resolve the config file to use and load it, applying env overrides.
    ///
    /// An explicit path must exist. Without one, `./stockroom.toml` and then
    /// the user config are tried; defaults are used when neither exists.
    pub fn discover(
        explicit: Option<&Path>,
        cwd: &Path,
    ) -> StockroomResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, cwd)
    }
}
