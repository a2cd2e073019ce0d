use crate::config::Config;
use crate::core::window::{filter_window, parse_window};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::RecordExport;
use crate::export::notify_export_success;
use crate::store::audit;
use crate::store::ledger::LedgerStore;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of attendance records.
pub struct ExportLogic;

impl ExportLogic {
    /// Dump records to `file`, optionally scoped to one user and/or a
    /// trailing window (`day`, `week`, `month` or a number of days).
    pub fn export(
        cfg: &Config,
        format: &ExportFormat,
        file: &str,
        window: &Option<String>,
        user: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        // window is validated before the ledger is touched
        let days = match window {
            None => None,
            Some(w) => Some(parse_window(w)?),
        };

        let store = LedgerStore::open(&cfg.ledger);
        let ledger = store.load()?;

        let mut rows = Vec::new();
        for (user_id, records) in &ledger {
            if let Some(wanted) = user
                && wanted != user_id
            {
                continue;
            }

            let slice = match days {
                Some(d) => filter_window(records, d)?,
                None => records.clone(),
            };

            for record in slice {
                rows.push(RecordExport {
                    user_id: user_id.clone(),
                    username: record.username.clone(),
                    kind: record.kind.to_ledger_str().to_string(),
                    timestamp: record.timestamp_str(),
                });
            }
        }

        if rows.is_empty() {
            warning("No attendance records for the selected scope.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        notify_export_success(format.as_str(), path);

        let _ = audit::audit(
            &cfg.audit_log,
            "export",
            file,
            &format!("{} record(s) exported as {}", rows.len(), format.as_str()),
        );

        Ok(())
    }
}
