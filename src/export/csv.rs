use crate::export::model::RecordExport;
use csv::Writer;
use std::path::Path;

/// Write the flattened records as CSV.
pub(crate) fn export_csv(rows: &[RecordExport], path: &Path) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["user_id", "username", "kind", "timestamp"])?;

    for row in rows {
        wtr.write_record([
            row.user_id.as_str(),
            row.username.as_str(),
            row.kind.as_str(),
            row.timestamp.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
