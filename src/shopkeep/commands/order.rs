use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShopError};
use crate::history::OrderHistory;
use crate::store::{DataStore, OrderRecord};

/// Place an order: decrement stock, log the order, persist the catalog.
///
/// Total price applies the discount before the tax:
/// `price × (1 − discount/100) × (1 + tax/100) × quantity`.
pub fn run<S: DataStore>(
    catalog: &mut Catalog,
    history: &mut OrderHistory,
    store: &mut S,
    id: u32,
    quantity: u32,
) -> Result<CmdResult> {
    let product = catalog.get_mut(id).ok_or(ShopError::ProductNotFound(id))?;

    if quantity > product.quantity {
        return Err(ShopError::InsufficientStock {
            id,
            requested: quantity,
            available: product.quantity,
        });
    }

    product.quantity -= quantity;
    let total = product.net_unit_price() * f64::from(quantity);
    let snapshot = product.clone();

    store.append_order(&OrderRecord {
        product_id: id,
        product_name: snapshot.name.clone(),
        quantity,
        total,
    })?;
    store.save_products(&catalog.products())?;
    history.record(snapshot.clone());

    let mut result = CmdResult::default()
        .with_products(vec![snapshot])
        .with_total(total);
    result.add_message(CmdMessage::success("Order placed successfully."));
    Ok(result)
}
