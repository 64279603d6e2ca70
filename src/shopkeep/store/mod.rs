//! # Storage Layer
//!
//! This module defines the storage abstraction for shopkeep. The [`DataStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Catalog, admins and wishlist as delimited text files
//!   - Append-only, human-readable order log
//!   - On-demand report dump
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! For `FileStore`, everything lives under a single data directory:
//! ```text
//! <data-dir>/
//! ├── products.csv    # id,name,category,price,quantity,discount,tax,date
//! ├── admins.csv      # username,password
//! ├── wishlist.csv    # same 8-field layout as products.csv
//! ├── orders.log      # append-only, human-readable, never parsed back
//! ├── report.csv      # on-demand full dump with header row
//! └── config.json     # ShopConfig
//! ```
//!
//! Every save is a full truncate-and-rewrite of the whole file, so a crash
//! between a mutation and its save leaves the on-disk state stale but never
//! corrupt. Malformed lines are skipped on load, never fatal.

use std::path::PathBuf;

use crate::error::Result;
use crate::model::{AdminCredential, Product};

pub mod fs;
pub mod memory;

/// A completed order, as appended to the order log.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub product_id: u32,
    pub product_name: String,
    pub quantity: u32,
    pub total: f64,
}

/// Records parsed from a delimited file, plus diagnostics for every line that
/// had to be skipped. Loads never abort on malformed input.
#[derive(Debug)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    pub skipped: Vec<String>,
}

impl<T> Default for Loaded<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

impl<T> Loaded<T> {
    pub fn from_records(records: Vec<T>) -> Self {
        Self {
            records,
            skipped: Vec::new(),
        }
    }
}

/// Abstract interface for shopkeep persistence.
pub trait DataStore {
    /// Load the persisted catalog
    fn load_products(&self) -> Result<Loaded<Product>>;

    /// Replace the persisted catalog with the given records
    fn save_products(&mut self, products: &[Product]) -> Result<()>;

    /// Load admin credentials; a store with no admin record yet must seed the
    /// default credential
    fn load_admins(&self) -> Result<Loaded<AdminCredential>>;

    /// Replace the persisted admin list
    fn save_admins(&mut self, admins: &[AdminCredential]) -> Result<()>;

    /// Load the persisted wishlist, most-recent-first
    fn load_wishlist(&self) -> Result<Loaded<Product>>;

    /// Replace the persisted wishlist
    fn save_wishlist(&mut self, entries: &[Product]) -> Result<()>;

    /// Append one order to the append-only order log
    fn append_order(&mut self, order: &OrderRecord) -> Result<()>;

    /// Write the full catalog report; returns where it was written
    fn write_report(&mut self, products: &[Product]) -> Result<PathBuf>;
}
