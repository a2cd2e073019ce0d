use serde::Serialize;

/// One flattened attendance record, ready for CSV/JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct RecordExport {
    pub user_id: String,
    pub username: String,
    pub kind: String,
    pub timestamp: String,
}
