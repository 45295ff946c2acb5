//! Product entity - one catalog entry
//!
//! Shared fields live on [`Product`]; what differs between food and
//! electronics lives in [`ProductKind`].

use std::cmp::Ordering;
use std::fmt::Write;

use crate::domain::value_objects::{Price, DEFAULT_CURRENCY};

/// Variant-specific part of a product
#[derive(Debug, Clone, PartialEq)]
pub enum ProductKind {
    /// Perishable goods with a free-form expiry date (e.g. `2023-05-20`)
    Food { expiry_date: String },
    /// Devices identified by their brand
    Electronics { brand: String },
}

impl ProductKind {
    /// Short lowercase label, as used in config files and JSON output
    pub fn label(&self) -> &'static str {
        match self {
            ProductKind::Food { .. } => "food",
            ProductKind::Electronics { .. } => "electronics",
        }
    }

    fn render_extra(&self, out: &mut String) {
        // Writing to a String cannot fail.
        let _ = match self {
            ProductKind::Food { expiry_date } => writeln!(out, "Expiry Date: {}", expiry_date),
            ProductKind::Electronics { brand } => writeln!(out, "Brand: {}", brand),
        };
    }
}

/// A catalog entry
///
/// Nothing is validated on construction: negative prices, empty names and
/// duplicate ids are all accepted. Fields are fixed once created.
#[derive(Debug, Clone)]
pub struct Product {
    name: String,
    category: String,
    price: Price,
    quantity: i64,
    id: i64,
    kind: ProductKind,
}

impl Product {
    /// Create a product of any kind
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<Price>,
        quantity: i64,
        id: i64,
        kind: ProductKind,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price: price.into(),
            quantity,
            id,
            kind,
        }
    }

    /// Create a food product
    pub fn food(
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<Price>,
        quantity: i64,
        id: i64,
        expiry_date: impl Into<String>,
    ) -> Self {
        let kind = ProductKind::Food {
            expiry_date: expiry_date.into(),
        };
        Self::new(name, category, price, quantity, id, kind)
    }

    /// Create an electronics product
    pub fn electronics(
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<Price>,
        quantity: i64,
        id: i64,
        brand: impl Into<String>,
    ) -> Self {
        let kind = ProductKind::Electronics {
            brand: brand.into(),
        };
        Self::new(name, category, price, quantity, id, kind)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// Render details with the default `$` prefix
    pub fn render_details(&self) -> String {
        self.render_details_with(DEFAULT_CURRENCY)
    }

    /// Render the multi-line description.
    ///
    /// Shared fields always come first; the variant line is appended last.
    pub fn render_details_with(&self, currency: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Product Name: {}", self.name);
        let _ = writeln!(out, "Category: {}", self.category);
        let _ = writeln!(out, "Price: {}", self.price.display(currency));
        let _ = writeln!(out, "Quantity: {}", self.quantity);
        let _ = writeln!(out, "ID: {}", self.id);
        self.kind.render_extra(&mut out);
        out
    }

    /// Compare two products by price only (ascending).
    pub fn cmp_by_price(&self, other: &Self) -> Ordering {
        self.price.total_cmp(&other.price)
    }
}
