//! Inventory entity - the ordered collection of products
//!
//! The inventory owns its products outright. Lookups are linear scans in the
//! current order and always act on the first match; ids are not required to
//! be unique.

use std::fmt;

use tracing::debug;

use super::product::Product;
use crate::domain::value_objects::DEFAULT_CURRENCY;

/// Line printed after every product in a full listing
pub const DIVIDER: &str = "---------------------";

/// Result of [`Inventory::remove_product`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The first product with this id was removed
    Removed { id: i64 },
    /// No product has this id; nothing changed
    NotFound { id: i64 },
}

impl RemoveOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, RemoveOutcome::Removed { .. })
    }
}

impl fmt::Display for RemoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveOutcome::Removed { id } => {
                write!(f, "Product with ID {} has been removed.", id)
            }
            RemoveOutcome::NotFound { id } => write!(f, "Product with ID {} not found.", id),
        }
    }
}

/// Result of [`Inventory::search_product`]
#[derive(Debug, Clone, Copy)]
pub enum SearchOutcome<'a> {
    /// First product whose name matched exactly
    Found(&'a Product),
    /// No exact match
    NotFound { name: &'a str },
}

impl<'a> SearchOutcome<'a> {
    pub fn product(&self) -> Option<&'a Product> {
        match *self {
            SearchOutcome::Found(product) => Some(product),
            SearchOutcome::NotFound { .. } => None,
        }
    }

    /// Product details, or the not-found message
    pub fn render(&self, currency: &str) -> String {
        match self {
            SearchOutcome::Found(product) => product.render_details_with(currency),
            SearchOutcome::NotFound { name } => {
                format!("Product with name {} not found.\n", name)
            }
        }
    }
}

/// Result of [`Inventory::display_all`]
#[derive(Debug, Clone)]
pub enum Listing<'a> {
    /// The inventory holds no products
    Empty,
    /// Every product, in current order
    Products(Vec<&'a Product>),
}

impl Listing<'_> {
    pub fn len(&self) -> usize {
        match self {
            Listing::Empty => 0,
            Listing::Products(products) => products.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }

    /// Each product's details followed by [`DIVIDER`], or the empty message.
    pub fn render(&self, currency: &str) -> String {
        match self {
            Listing::Empty => "No products in inventory.\n".to_string(),
            Listing::Products(products) => {
                let mut out = String::new();
                for product in products {
                    out.push_str(&product.render_details_with(currency));
                    out.push_str(DIVIDER);
                    out.push('\n');
                }
                out
            }
        }
    }
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_CURRENCY))
    }
}

/// Ordered, owning collection of products
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product at the end.
    pub fn add_product(&mut self, product: Product) {
        debug!(id = product.id(), name = product.name(), "adding product");
        self.products.push(product);
    }

    /// Remove the first product with `id`. The removed product is dropped.
    pub fn remove_product(&mut self, id: i64) -> RemoveOutcome {
        match self.products.iter().position(|p| p.id() == id) {
            Some(index) => {
                let removed = self.products.remove(index);
                debug!(id, name = removed.name(), index, "removed product");
                RemoveOutcome::Removed { id }
            }
            None => {
                debug!(id, "no product to remove");
                RemoveOutcome::NotFound { id }
            }
        }
    }

    /// Find the first product whose name equals `name` exactly (case-sensitive).
    pub fn search_product<'a>(&'a self, name: &'a str) -> SearchOutcome<'a> {
        match self.products.iter().find(|p| p.name() == name) {
            Some(product) => SearchOutcome::Found(product),
            None => SearchOutcome::NotFound { name },
        }
    }

    /// Every product in current order, or [`Listing::Empty`].
    pub fn display_all(&self) -> Listing<'_> {
        if self.products.is_empty() {
            Listing::Empty
        } else {
            Listing::Products(self.products.iter().collect())
        }
    }

    /// Stable in-place sort by ascending price.
    pub fn sort_by_price(&mut self) {
        self.products.sort_by(Product::cmp_by_price);
        debug!(count = self.products.len(), "sorted products by price");
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Ids in current order
    pub fn ids(&self) -> Vec<i64> {
        self.products.iter().map(Product::id).collect()
    }
}

impl Extend<Product> for Inventory {
    fn extend<I: IntoIterator<Item = Product>>(&mut self, iter: I) {
        for product in iter {
            self.add_product(product);
        }
    }
}

impl FromIterator<Product> for Inventory {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        inventory.extend(iter);
        inventory
    }
}
