use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, ProductUpdate};
use crate::error::{Result, ShopError};
use crate::store::DataStore;

/// Replace every field of a product except its id.
pub fn run<S: DataStore>(
    catalog: &mut Catalog,
    store: &mut S,
    id: u32,
    update: ProductUpdate,
) -> Result<CmdResult> {
    let product = catalog.get_mut(id).ok_or(ShopError::ProductNotFound(id))?;

    product.name = update.name;
    product.category = update.category;
    product.price = update.price;
    product.quantity = update.quantity;
    product.discount = update.discount;
    product.tax = update.tax;
    product.expiry = update.expiry;
    let snapshot = product.clone();

    store.save_products(&catalog.products())?;

    let mut result = CmdResult::default().with_products(vec![snapshot]);
    result.add_message(CmdMessage::success(format!("Product modified ({}).", id)));
    Ok(result)
}
