use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::{Result, ShopError};

/// Point lookup by product id.
pub fn run(catalog: &Catalog, id: u32) -> Result<CmdResult> {
    let product = catalog
        .get(id)
        .cloned()
        .ok_or(ShopError::ProductNotFound(id))?;
    Ok(CmdResult::default().with_products(vec![product]))
}
