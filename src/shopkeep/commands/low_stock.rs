use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::history::LowStockAlerts;

/// Scan the catalog for products below the threshold and feed the alert
/// queue. The queue is a secondary notification channel; the interactive flow
/// reports from the scan result directly and never drains it.
pub fn run(catalog: &Catalog, alerts: &mut LowStockAlerts, threshold: u32) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if catalog.is_empty() {
        result.add_message(CmdMessage::info("No products available."));
        return Ok(result);
    }

    let flagged = catalog.low_stock(threshold);
    if flagged.is_empty() {
        result.add_message(CmdMessage::info("No products have low stock levels."));
        return Ok(result);
    }

    for product in &flagged {
        alerts.flag(product.clone());
        result.add_message(CmdMessage::warning(format!(
            "Product {} ({}) has low stock: {} left",
            product.id, product.name, product.quantity
        )));
    }

    Ok(result.with_products(flagged))
}
