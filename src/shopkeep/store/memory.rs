use std::path::PathBuf;

use super::{DataStore, Loaded, OrderRecord};
use crate::error::Result;
use crate::model::{AdminCredential, Product};

/// In-memory storage for testing and development.
/// Does NOT persist data across processes.
#[derive(Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
    admins: Option<Vec<AdminCredential>>,
    wishlist: Vec<Product>,
    orders: Vec<OrderRecord>,
    last_report: Option<Vec<Product>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders appended so far, oldest first. Test inspection hook.
    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    /// The products passed to the last report write, if any.
    pub fn last_report(&self) -> Option<&[Product]> {
        self.last_report.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load_products(&self) -> Result<Loaded<Product>> {
        Ok(Loaded::from_records(self.products.clone()))
    }

    fn save_products(&mut self, products: &[Product]) -> Result<()> {
        self.products = products.to_vec();
        Ok(())
    }

    fn load_admins(&self) -> Result<Loaded<AdminCredential>> {
        // Mirrors FileStore: a store never saved to seeds the default admin.
        match &self.admins {
            Some(admins) => Ok(Loaded::from_records(admins.clone())),
            None => Ok(Loaded::from_records(vec![AdminCredential::default_admin()])),
        }
    }

    fn save_admins(&mut self, admins: &[AdminCredential]) -> Result<()> {
        self.admins = Some(admins.to_vec());
        Ok(())
    }

    fn load_wishlist(&self) -> Result<Loaded<Product>> {
        Ok(Loaded::from_records(self.wishlist.clone()))
    }

    fn save_wishlist(&mut self, entries: &[Product]) -> Result<()> {
        self.wishlist = entries.to_vec();
        Ok(())
    }

    fn append_order(&mut self, order: &OrderRecord) -> Result<()> {
        self.orders.push(order.clone());
        Ok(())
    }

    fn write_report(&mut self, products: &[Product]) -> Result<PathBuf> {
        self.last_report = Some(products.to_vec());
        Ok(PathBuf::from("report.csv"))
    }
}
