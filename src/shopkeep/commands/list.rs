use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// All products in ascending id order.
pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_products(catalog.products());
    if result.products.is_empty() {
        result.add_message(CmdMessage::info("No products available."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

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
    fn lists_in_ascending_id_order() {
        let mut catalog = Catalog::new();
        for id in [4, 2, 8] {
            catalog.insert(product(id)).unwrap();
        }
        let result = run(&catalog).unwrap();
        let ids: Vec<u32> = result.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4, 8]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_catalog_reports_no_products() {
        let result = run(&Catalog::new()).unwrap();
        assert!(result.products.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
