use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShopError};
use crate::store::DataStore;
use crate::wishlist::Wishlist;

/// Snapshot a catalog product onto the wishlist and persist it.
pub fn add<S: DataStore>(
    catalog: &Catalog,
    wishlist: &mut Wishlist,
    store: &mut S,
    id: u32,
) -> Result<CmdResult> {
    let snapshot = catalog
        .get(id)
        .cloned()
        .ok_or(ShopError::ProductNotFound(id))?;
    let name = snapshot.name.clone();

    wishlist.add(snapshot.clone());
    store.save_wishlist(wishlist.entries())?;

    let mut result = CmdResult::default().with_products(vec![snapshot]);
    result.add_message(CmdMessage::success(format!(
        "Added to wishlist ({}): {}",
        id, name
    )));
    Ok(result)
}

/// Wishlist entries in storage order, most recently added first.
pub fn view(wishlist: &Wishlist) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_products(wishlist.entries().to_vec());
    if result.products.is_empty() {
        result.add_message(CmdMessage::info("Your wishlist is empty."));
    }
    Ok(result)
}

/// Remove the first wishlist entry with the given id and persist.
pub fn remove<S: DataStore>(wishlist: &mut Wishlist, store: &mut S, id: u32) -> Result<CmdResult> {
    if !wishlist.remove(id) {
        return Err(ShopError::ProductNotFound(id));
    }
    store.save_wishlist(wishlist.entries())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed from wishlist ({}).",
        id
    )));
    Ok(result)
}
