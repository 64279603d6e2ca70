//! # API Facade
//!
//! [`ShopApi`] is the single entry point for all shopkeep operations. It owns
//! the in-memory stores (catalog, wishlist, order history, low-stock alerts,
//! admin credentials) plus the storage backend, and delegates the business
//! logic to the command layer.
//!
//! ## Lifecycle
//!
//! `ShopApi::open` loads all persisted state; every mutating operation saves
//! the affected file immediately; [`ShopApi::flush`] rewrites everything. A
//! `Drop` impl performs a best-effort flush so the save-on-exit behavior runs
//! on every exit path, not just the menu's explicit exit choice.
//!
//! ## Generic Over DataStore
//!
//! `ShopApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ShopApi<FileStore>`
//! - Testing: `ShopApi<InMemoryStore>`

use crate::catalog::Catalog;
use crate::commands;
use crate::commands::{CmdMessage, CmdResult, ProductUpdate};
use crate::config::ShopConfig;
use crate::error::Result;
use crate::history::{LowStockAlerts, OrderHistory};
use crate::model::{AdminCredential, Product};
use crate::store::DataStore;
use crate::wishlist::Wishlist;

pub struct ShopApi<S: DataStore> {
    store: S,
    config: ShopConfig,
    catalog: Catalog,
    wishlist: Wishlist,
    orders: OrderHistory,
    alerts: LowStockAlerts,
    admins: Vec<AdminCredential>,
    startup_warnings: Vec<CmdMessage>,
}

impl<S: DataStore> ShopApi<S> {
    /// Load all persisted state from the store. Malformed records are skipped,
    /// never fatal; the diagnostics are kept as [`ShopApi::startup_warnings`].
    pub fn open(store: S, config: ShopConfig) -> Result<Self> {
        let mut warnings = Vec::new();

        let loaded_products = store.load_products()?;
        warnings.extend(loaded_products.skipped.iter().map(CmdMessage::warning));
        let mut catalog = Catalog::new();
        for product in loaded_products.records {
            let id = product.id;
            if catalog.insert(product).is_err() {
                warnings.push(CmdMessage::warning(format!(
                    "Skipping duplicate product id in store: {}",
                    id
                )));
            }
        }

        let loaded_admins = store.load_admins()?;
        warnings.extend(loaded_admins.skipped.iter().map(CmdMessage::warning));

        let loaded_wishlist = store.load_wishlist()?;
        warnings.extend(loaded_wishlist.skipped.iter().map(CmdMessage::warning));

        Ok(Self {
            store,
            config,
            catalog,
            wishlist: Wishlist::from_entries(loaded_wishlist.records),
            orders: OrderHistory::new(),
            alerts: LowStockAlerts::new(),
            admins: loaded_admins.records,
            startup_warnings: warnings,
        })
    }

    /// Diagnostics collected while loading persisted state.
    pub fn startup_warnings(&self) -> &[CmdMessage] {
        &self.startup_warnings
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    // ----- admin operations -----

    pub fn login(&self, username: &str, password: &str) -> bool {
        commands::admins::login(&self.admins, username, password)
    }

    pub fn add_admin(&mut self, username: String, password: String) -> Result<CmdResult> {
        commands::admins::add(
            &mut self.admins,
            &mut self.store,
            AdminCredential::new(username, password),
        )
    }

    pub fn add_product(&mut self, product: Product) -> Result<CmdResult> {
        commands::add::run(&mut self.catalog, &mut self.store, product)
    }

    pub fn list_products(&self) -> Result<CmdResult> {
        commands::list::run(&self.catalog)
    }

    pub fn search_product(&self, id: u32) -> Result<CmdResult> {
        commands::search::run(&self.catalog, id)
    }

    pub fn modify_product(&mut self, id: u32, update: ProductUpdate) -> Result<CmdResult> {
        commands::modify::run(&mut self.catalog, &mut self.store, id, update)
    }

    pub fn delete_product(&mut self, id: u32) -> Result<CmdResult> {
        commands::delete::run(&mut self.catalog, &mut self.store, id)
    }

    pub fn total_inventory_value(&self) -> Result<CmdResult> {
        commands::value::run(&self.catalog)
    }

    pub fn generate_report(&mut self) -> Result<CmdResult> {
        commands::report::run(&self.catalog, &mut self.store)
    }

    pub fn check_low_stock(&mut self) -> Result<CmdResult> {
        commands::low_stock::run(
            &self.catalog,
            &mut self.alerts,
            self.config.low_stock_threshold,
        )
    }

    // ----- customer operations -----

    pub fn place_order(&mut self, id: u32, quantity: u32) -> Result<CmdResult> {
        commands::order::run(
            &mut self.catalog,
            &mut self.orders,
            &mut self.store,
            id,
            quantity,
        )
    }

    pub fn add_to_wishlist(&mut self, id: u32) -> Result<CmdResult> {
        commands::wishlist::add(&self.catalog, &mut self.wishlist, &mut self.store, id)
    }

    pub fn view_wishlist(&self) -> Result<CmdResult> {
        commands::wishlist::view(&self.wishlist)
    }

    pub fn remove_from_wishlist(&mut self, id: u32) -> Result<CmdResult> {
        commands::wishlist::remove(&mut self.wishlist, &mut self.store, id)
    }

    // ----- drain hooks for a surrounding system (unused interactively) -----

    pub fn pop_most_recent_order(&mut self) -> Option<Product> {
        self.orders.pop_most_recent()
    }

    pub fn dequeue_low_stock_alert(&mut self) -> Option<Product> {
        self.alerts.dequeue_next()
    }

    /// Persist every store. Mutating operations already save as they go; this
    /// is the shutdown barrier.
    pub fn flush(&mut self) -> Result<()> {
        self.store.save_products(&self.catalog.products())?;
        self.store.save_admins(&self.admins)?;
        self.store.save_wishlist(self.wishlist.entries())?;
        Ok(())
    }
}

impl<S: DataStore> Drop for ShopApi<S> {
    fn drop(&mut self) {
        // Best effort: persistence errors at shutdown have nowhere to go.
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn product(id: u32, quantity: u32) -> Product {
        Product {
            id,
            name: format!("Item{}", id),
            category: "General".to_string(),
            price: 10.0,
            quantity,
            discount: 0.0,
            tax: 0.0,
            expiry: "2026-01-15".to_string(),
        }
    }

    fn open_empty() -> ShopApi<InMemoryStore> {
        ShopApi::open(InMemoryStore::new(), ShopConfig::default()).unwrap()
    }

    #[test]
    fn fresh_store_seeds_default_admin() {
        let api = open_empty();
        assert!(api.login("admin", "admin"));
        assert!(!api.login("admin", "nope"));
    }

    #[test]
    fn added_products_list_in_id_order() {
        let mut api = open_empty();
        for id in [5, 1, 3] {
            api.add_product(product(id, 10)).unwrap();
        }
        let listed = api.list_products().unwrap().products;
        let ids: Vec<u32> = listed.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn order_flow_updates_catalog_and_history() {
        let mut api = open_empty();
        api.add_product(product(1, 10)).unwrap();

        let result = api.place_order(1, 4).unwrap();
        assert!((result.total.unwrap() - 40.0).abs() < 1e-9);
        assert_eq!(api.search_product(1).unwrap().products[0].quantity, 6);
        assert_eq!(api.pop_most_recent_order().unwrap().id, 1);
        assert!(api.pop_most_recent_order().is_none());
    }

    #[test]
    fn low_stock_check_feeds_the_alert_queue() {
        let mut api = open_empty();
        api.add_product(product(1, 5)).unwrap();
        api.add_product(product(2, 25)).unwrap();

        api.check_low_stock().unwrap();

        assert_eq!(api.dequeue_low_stock_alert().unwrap().id, 1);
        assert!(api.dequeue_low_stock_alert().is_none());
    }

    #[test]
    fn wishlist_flow_is_most_recent_first() {
        let mut api = open_empty();
        api.add_product(product(1, 10)).unwrap();
        api.add_product(product(2, 10)).unwrap();

        api.add_to_wishlist(1).unwrap();
        api.add_to_wishlist(2).unwrap();

        let viewed = api.view_wishlist().unwrap().products;
        let ids: Vec<u32> = viewed.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);

        api.remove_from_wishlist(2).unwrap();
        assert_eq!(api.view_wishlist().unwrap().products.len(), 1);
    }

    #[test]
    fn open_skips_duplicate_ids_with_a_warning() {
        let mut store = InMemoryStore::new();
        store
            .save_products(&[product(1, 5), product(1, 9), product(2, 3)])
            .unwrap();

        let api = ShopApi::open(store, ShopConfig::default()).unwrap();

        assert_eq!(api.list_products().unwrap().products.len(), 2);
        assert_eq!(api.search_product(1).unwrap().products[0].quantity, 5);
        assert_eq!(api.startup_warnings().len(), 1);
    }
}
