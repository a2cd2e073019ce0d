use serde::{Deserialize, Serialize};

/// The two kinds of attendance record. The on-disk names (`entrada` /
/// `salida`) are fixed by the ledger wire format and must not change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecordKind {
    #[serde(rename = "entrada")]
    Entry,
    #[serde(rename = "salida")]
    Exit,
}

impl RecordKind {
    pub fn rk_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "entrada" | "entry" | "in" => Some(Self::Entry),
            "salida" | "exit" | "out" => Some(Self::Exit),
            _ => None,
        }
    }

    /// Convert enum → ledger string
    pub fn to_ledger_str(&self) -> &'static str {
        match self {
            RecordKind::Entry => "entrada",
            RecordKind::Exit => "salida",
        }
    }

    pub fn is_entry(&self) -> bool {
        matches!(self, RecordKind::Entry)
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, RecordKind::Exit)
    }
}
