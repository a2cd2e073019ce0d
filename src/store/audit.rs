//! Append-only operations log (`init`, `clock_in`, `force_out`, ...).
//! One line per operation; failures here must never block the command
//! that triggered the log write.

use crate::errors::AppResult;
use chrono::Local;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write one audit line: `<timestamp> | <operation> | <target> | <message>`.
pub fn audit(path: &str, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{now} | {operation} | {target} | {message}")?;

    Ok(())
}

/// Read the audit log back. Missing file → empty list; malformed lines
/// are skipped rather than failing the whole read.
pub fn load_audit(path: &str) -> AppResult<Vec<AuditEntry>> {
    if !Path::new(path).exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let mut entries = Vec::new();

    for line in content.lines() {
        let mut parts = line.splitn(4, " | ");
        let (Some(date), Some(operation), Some(target), Some(message)) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            continue;
        };

        entries.push(AuditEntry {
            date: date.to_string(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
    }

    Ok(entries)
}
