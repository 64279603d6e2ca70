//! Insertion-ordered wishlist of product snapshots, most recently added first.

use crate::model::Product;

#[derive(Debug, Default)]
pub struct Wishlist {
    entries: Vec<Product>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a wishlist from persisted entries, already most-recent-first.
    pub fn from_entries(entries: Vec<Product>) -> Self {
        Self { entries }
    }

    /// Prepend a snapshot so the most recent addition is listed first.
    pub fn add(&mut self, snapshot: Product) {
        self.entries.insert(0, snapshot);
    }

    /// Remove the first entry with the given id. Returns whether one was found.
    pub fn remove(&mut self, id: u32) -> bool {
        match self.entries.iter().position(|p| p.id == id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Entries in storage order (most-recent-first), not id order.
    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
