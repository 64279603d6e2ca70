use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShopError};
use crate::store::DataStore;

pub fn run<S: DataStore>(catalog: &mut Catalog, store: &mut S, id: u32) -> Result<CmdResult> {
    let removed = catalog
        .get(id)
        .cloned()
        .ok_or(ShopError::ProductNotFound(id))?;
    catalog.remove(id);
    store.save_products(&catalog.products())?;

    let mut result = CmdResult::default().with_products(vec![removed]);
    result.add_message(CmdMessage::success(format!("Product deleted ({}).", id)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use crate::store::memory::InMemoryStore;

    fn product(id: u32) -> Product {
        Product {
            id,
            name: format!("Item{}", id),
            category: "General".to_string(),
            price: 1.0,
            quantity: 1,
            discount: 0.0,
            tax: 0.0,
            expiry: "2026-01-15".to_string(),
        }
    }

    #[test]
    fn deletes_and_persists_remaining() {
        let mut catalog = Catalog::new();
        let mut store = InMemoryStore::new();
        catalog.insert(product(1)).unwrap();
        catalog.insert(product(2)).unwrap();

        run(&mut catalog, &mut store, 1).unwrap();

        assert!(catalog.get(1).is_none());
        let persisted = store.load_products().unwrap().records;
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].id, 2);
    }

    #[test]
    fn unknown_id_is_reported_without_saving() {
        let mut catalog = Catalog::new();
        let mut store = InMemoryStore::new();
        catalog.insert(product(1)).unwrap();

        let err = run(&mut catalog, &mut store, 5).unwrap_err();
        assert!(matches!(err, ShopError::ProductNotFound(5)));
        assert_eq!(catalog.len(), 1);
    }
}
