use super::record_kind::RecordKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single attendance event. Immutable once written to the ledger.
///
/// Field names on disk (`tipo`, `fecha`, `username`) follow the ledger
/// wire format so that documents written by earlier deployments keep
/// loading unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceRecord {
    #[serde(rename = "tipo")]
    pub kind: RecordKind,
    #[serde(rename = "fecha")]
    pub timestamp: DateTime<Utc>,
    pub username: String,
}

impl AttendanceRecord {
    /// Record stamped with the current instant.
    pub fn new(kind: RecordKind, username: &str) -> Self {
        Self::at(kind, username, Utc::now())
    }

    /// Record with an explicit timestamp.
    pub fn at(kind: RecordKind, username: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind,
            timestamp,
            username: username.to_string(),
        }
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.to_rfc3339()
    }
}
