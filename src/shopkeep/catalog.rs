//! The ordered product catalog, keyed by integer product id.
//!
//! Backed by a `BTreeMap` so that enumeration is always in ascending id order
//! and point lookups stay logarithmic without any manual balancing. Inserting
//! an id that already exists is rejected rather than silently creating a
//! second entry.

use std::collections::BTreeMap;

use crate::error::{Result, ShopError};
use crate::model::Product;

#[derive(Debug, Default)]
pub struct Catalog {
    products: BTreeMap<u32, Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product keyed by its id. Fails if the id is already present.
    pub fn insert(&mut self, product: Product) -> Result<()> {
        if self.products.contains_key(&product.id) {
            return Err(ShopError::DuplicateProduct(product.id));
        }
        self.products.insert(product.id, product);
        Ok(())
    }

    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Mutable handle so callers can adjust quantity or fields in place.
    pub fn get_mut(&mut self, id: u32) -> Option<&mut Product> {
        self.products.get_mut(&id)
    }

    /// Remove a product. A no-op when the id is absent.
    pub fn remove(&mut self, id: u32) {
        self.products.remove(&id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// All products as snapshots, in ascending id order.
    pub fn products(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Total value of the stock on hand, at net unit prices.
    pub fn total_value(&self) -> f64 {
        self.products
            .values()
            .map(|p| p.net_unit_price() * f64::from(p.quantity))
            .sum()
    }

    /// Snapshots of every product with quantity strictly below `threshold`,
    /// in ascending id order.
    pub fn low_stock(&self, threshold: u32) -> Vec<Product> {
        self.products
            .values()
            .filter(|p| p.quantity < threshold)
            .cloned()
            .collect()
    }
}
