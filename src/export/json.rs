use crate::errors::{AppError, AppResult};
use crate::export::model::RecordExport;
use std::path::Path;

/// Write the flattened records as pretty-printed JSON.
pub(crate) fn export_json(rows: &[RecordExport], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("cannot serialize records: {e}")))?;
    std::fs::write(path, json)?;
    Ok(())
}
