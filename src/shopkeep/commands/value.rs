use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;

/// Total value of the stock on hand at net unit prices.
pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    Ok(CmdResult::default().with_total(catalog.total_value()))
}
