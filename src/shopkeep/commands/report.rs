use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Dump the full catalog to the report file. The report is write-only output;
/// nothing in shopkeep ever reads it back.
pub fn run<S: DataStore>(catalog: &Catalog, store: &mut S) -> Result<CmdResult> {
    let path = store.write_report(&catalog.products())?;

    let mut result = CmdResult::default().with_report_path(path.clone());
    result.add_message(CmdMessage::success(format!(
        "Report written to {}",
        path.display()
    )));
    Ok(result)
}
