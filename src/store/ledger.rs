//! Durable attendance ledger backed by a single JSON document.
//!
//! Layout on disk: top-level keys are user ids, each mapping to the
//! ordered array of that user's attendance records:
//!
//! ```json
//! { "<userId>": [ { "tipo": "entrada", "fecha": "...", "username": "..." } ] }
//! ```
//!
//! Mutations go through an internal lock and an atomic
//! write-then-rename, so a crash mid-write leaves either the old or the
//! new complete document and `load()` never observes a torn file.

use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Full ledger: user id → ordered sequence of records (append order).
/// BTreeMap keeps user iteration deterministic across loads.
pub type Ledger = BTreeMap<String, Vec<AttendanceRecord>>;

pub struct LedgerStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl LedgerStore {
    /// Handle on the ledger file. No I/O happens until `load`/`update`.
    pub fn open(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full ledger. A missing or empty file is an empty ledger.
    pub fn load(&self) -> AppResult<Ledger> {
        if !self.path.exists() {
            return Ok(Ledger::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Ledger::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            AppError::Persistence(format!("cannot parse {}: {}", self.path.display(), e))
        })
    }

    /// Run one read-modify-write cycle as a critical section.
    ///
    /// The closure validates and mutates the in-memory ledger; when it
    /// returns `Ok` the full document is written back atomically. When
    /// it returns `Err` nothing is written, so a rejected transition
    /// leaves the ledger untouched. Concurrent callers are serialized
    /// by the internal lock and cannot lose each other's updates.
    pub fn update<T, F>(&self, mutate: F) -> AppResult<T>
    where
        F: FnOnce(&mut Ledger) -> AppResult<T>,
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| AppError::Persistence("ledger write lock poisoned".to_string()))?;

        let mut ledger = self.load()?;
        let out = mutate(&mut ledger)?;
        self.write_atomic(&ledger)?;

        Ok(out)
    }

    /// Append one record to the tail of a user's sequence.
    pub fn append(&self, user_id: &str, record: AttendanceRecord) -> AppResult<()> {
        self.update(|ledger| {
            ledger.entry(user_id.to_string()).or_default().push(record);
            Ok(())
        })
    }

    /// Serialize the full document to a sibling temp file, fsync, then
    /// rename over the target. Rename is atomic on the same filesystem.
    fn write_atomic(&self, ledger: &Ledger) -> AppResult<()> {
        let json = serde_json::to_string_pretty(ledger)
            .map_err(|e| AppError::Persistence(format!("cannot serialize ledger: {e}")))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.tmp_path();
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
        }

        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut os = self.path.as_os_str().to_os_string();
        os.push(".tmp");
        PathBuf::from(os)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record_kind::RecordKind;
    use chrono::Utc;

    fn temp_store(name: &str) -> LedgerStore {
        let path = std::env::temp_dir().join(format!(
            "shiftledger_store_{}_{}.json",
            std::process::id(),
            name
        ));
        let _ = fs::remove_file(&path);
        LedgerStore::open(&path.to_string_lossy())
    }

    #[test]
    fn load_missing_file_is_empty_ledger() {
        let store = temp_store("missing");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn append_round_trip_keeps_prior_records() {
        let store = temp_store("round_trip");

        let first = AttendanceRecord::at(RecordKind::Entry, "ana", Utc::now());
        let second = AttendanceRecord::at(RecordKind::Exit, "ana", Utc::now());

        store.append("100", first.clone()).unwrap();
        store.append("100", second.clone()).unwrap();

        let ledger = store.load().unwrap();
        let seq = &ledger["100"];
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[0], first);
        assert_eq!(seq[1], second);

        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn failed_update_writes_nothing() {
        let store = temp_store("failed_update");
        store
            .append("9", AttendanceRecord::at(RecordKind::Entry, "dov", Utc::now()))
            .unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        let err: AppResult<()> = store.update(|ledger| {
            ledger.entry("9".to_string()).or_default().clear();
            Err(AppError::Other("rejected".to_string()))
        });
        assert!(err.is_err());

        let after = fs::read_to_string(store.path()).unwrap();
        assert_eq!(before, after);

        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn append_leaves_no_temp_file_behind() {
        let store = temp_store("no_tmp");
        store
            .append("7", AttendanceRecord::at(RecordKind::Entry, "bo", Utc::now()))
            .unwrap();

        assert!(store.path().exists());
        assert!(!store.tmp_path().exists());

        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn corrupt_document_is_a_persistence_error() {
        let store = temp_store("corrupt");
        fs::write(store.path(), "{ not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, AppError::Persistence(_)));

        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn wire_format_uses_tipo_and_fecha_keys() {
        let store = temp_store("wire");
        store
            .append("42", AttendanceRecord::at(RecordKind::Entry, "cleo", Utc::now()))
            .unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"tipo\": \"entrada\""));
        assert!(raw.contains("\"fecha\""));
        assert!(raw.contains("\"username\": \"cleo\""));

        let _ = fs::remove_file(store.path());
    }
}
