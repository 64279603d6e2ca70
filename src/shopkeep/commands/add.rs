use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    catalog: &mut Catalog,
    store: &mut S,
    product: Product,
) -> Result<CmdResult> {
    let id = product.id;
    let name = product.name.clone();
    let snapshot = product.clone();

    catalog.insert(product)?;
    store.save_products(&catalog.products())?;

    let mut result = CmdResult::default().with_products(vec![snapshot]);
    result.add_message(CmdMessage::success(format!(
        "Product added ({}): {}",
        id, name
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShopError;
    use crate::store::memory::InMemoryStore;

    fn product(id: u32) -> Product {
        Product {
            id,
            name: "Sugar".to_string(),
            category: "Grocery".to_string(),
            price: 10.0,
            quantity: 5,
            discount: 0.0,
            tax: 0.0,
            expiry: "2026-01-15".to_string(),
        }
    }

    #[test]
    fn adds_and_persists() {
        let mut catalog = Catalog::new();
        let mut store = InMemoryStore::new();

        run(&mut catalog, &mut store, product(1)).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(store.load_products().unwrap().records.len(), 1);
    }

    #[test]
    fn duplicate_id_is_rejected_and_nothing_saved() {
        let mut catalog = Catalog::new();
        let mut store = InMemoryStore::new();
        run(&mut catalog, &mut store, product(1)).unwrap();

        let mut dup = product(1);
        dup.name = "Other".to_string();
        let err = run(&mut catalog, &mut store, dup).unwrap_err();

        assert!(matches!(err, ShopError::DuplicateProduct(1)));
        assert_eq!(catalog.get(1).unwrap().name, "Sugar");
        let persisted = store.load_products().unwrap().records;
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].name, "Sugar");
    }
}
