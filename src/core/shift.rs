//! Per-user shift state machine.
//!
//! State is never stored: a user is on duty iff their ledger slice
//! contains more Entry than Exit records. Both transitions validate
//! inside the store's critical section, so a rejected transition
//! appends nothing and two near-simultaneous calls cannot both pass
//! the same precondition.

use crate::errors::{AppError, AppResult};
use crate::models::duty_status::DutyStatus;
use crate::models::record::AttendanceRecord;
use crate::models::record_kind::RecordKind;
use crate::store::ledger::LedgerStore;
use chrono::{DateTime, Duration, Utc};

pub struct ShiftLogic;

impl ShiftLogic {
    /// Derived state for one user's ledger slice.
    pub fn duty_status(records: &[AttendanceRecord]) -> DutyStatus {
        let entries = records.iter().filter(|r| r.kind.is_entry()).count();
        let exits = records.iter().filter(|r| r.kind.is_exit()).count();

        if entries > exits {
            DutyStatus::OnDuty
        } else {
            DutyStatus::OffDuty
        }
    }

    /// Start instant of the currently open shift: the most recent Entry,
    /// which is unmatched whenever the user is on duty.
    pub fn open_shift_start(records: &[AttendanceRecord]) -> Option<DateTime<Utc>> {
        if !Self::duty_status(records).is_on_duty() {
            return None;
        }

        records
            .iter()
            .rev()
            .find(|r| r.kind.is_entry())
            .map(|r| r.timestamp)
    }

    /// Open a shift. Fails with `AlreadyOnDuty` (nothing appended) when
    /// the user already has an open shift. Returns the Entry instant.
    pub fn clock_in(
        store: &LedgerStore,
        user_id: &str,
        username: &str,
    ) -> AppResult<DateTime<Utc>> {
        store.update(|ledger| {
            let records = ledger.entry(user_id.to_string()).or_default();

            if Self::duty_status(records).is_on_duty() {
                return Err(AppError::AlreadyOnDuty(user_id.to_string()));
            }

            let record = AttendanceRecord::new(RecordKind::Entry, username);
            let started = record.timestamp;
            records.push(record);

            Ok(started)
        })
    }

    /// Close the open shift. Fails with `NotOnDuty` (nothing appended)
    /// when there is none. Returns the elapsed time since its Entry.
    pub fn clock_out(store: &LedgerStore, user_id: &str, username: &str) -> AppResult<Duration> {
        store.update(|ledger| {
            let records = ledger
                .get_mut(user_id)
                .ok_or_else(|| AppError::NotOnDuty(user_id.to_string()))?;

            let started = Self::open_shift_start(records)
                .ok_or_else(|| AppError::NotOnDuty(user_id.to_string()))?;

            let record = AttendanceRecord::new(RecordKind::Exit, username);
            let elapsed = record.timestamp - started;
            records.push(record);

            Ok(elapsed)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_store(name: &str) -> LedgerStore {
        let path = std::env::temp_dir().join(format!(
            "shiftledger_shift_{}_{}.json",
            std::process::id(),
            name
        ));
        let _ = fs::remove_file(&path);
        LedgerStore::open(&path.to_string_lossy())
    }

    fn records_for(store: &LedgerStore, user_id: &str) -> Vec<AttendanceRecord> {
        store.load().unwrap().get(user_id).cloned().unwrap_or_default()
    }

    #[test]
    fn duty_status_counts_entries_against_exits() {
        let mk = |kind| AttendanceRecord::at(kind, "ana", Utc::now());

        assert_eq!(ShiftLogic::duty_status(&[]), DutyStatus::OffDuty);
        assert_eq!(
            ShiftLogic::duty_status(&[mk(RecordKind::Entry)]),
            DutyStatus::OnDuty
        );
        assert_eq!(
            ShiftLogic::duty_status(&[mk(RecordKind::Entry), mk(RecordKind::Exit)]),
            DutyStatus::OffDuty
        );
        assert_eq!(
            ShiftLogic::duty_status(&[
                mk(RecordKind::Entry),
                mk(RecordKind::Exit),
                mk(RecordKind::Entry)
            ]),
            DutyStatus::OnDuty
        );
    }

    #[test]
    fn clock_in_then_out_closes_the_shift() {
        let store = temp_store("in_out");

        ShiftLogic::clock_in(&store, "100", "ana").unwrap();
        assert_eq!(
            ShiftLogic::duty_status(&records_for(&store, "100")),
            DutyStatus::OnDuty
        );

        let elapsed = ShiftLogic::clock_out(&store, "100", "ana").unwrap();
        assert!(elapsed >= Duration::zero());

        let records = records_for(&store, "100");
        assert_eq!(records.len(), 2);
        assert_eq!(ShiftLogic::duty_status(&records), DutyStatus::OffDuty);

        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn double_clock_in_is_rejected_and_appends_nothing() {
        let store = temp_store("double_in");

        ShiftLogic::clock_in(&store, "100", "ana").unwrap();
        let err = ShiftLogic::clock_in(&store, "100", "ana").unwrap_err();
        assert!(matches!(err, AppError::AlreadyOnDuty(_)));

        // exactly one Entry in the ledger
        let records = records_for(&store, "100");
        assert_eq!(records.len(), 1);
        assert!(records[0].kind.is_entry());

        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn clock_out_while_off_duty_is_rejected_and_appends_nothing() {
        let store = temp_store("out_off_duty");

        let err = ShiftLogic::clock_out(&store, "100", "ana").unwrap_err();
        assert!(matches!(err, AppError::NotOnDuty(_)));
        assert!(records_for(&store, "100").is_empty());

        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn open_shift_start_is_the_last_entry() {
        let early = Utc::now() - Duration::hours(9);
        let late = Utc::now() - Duration::hours(1);

        let records = vec![
            AttendanceRecord::at(RecordKind::Entry, "ana", early),
            AttendanceRecord::at(RecordKind::Exit, "ana", early + Duration::hours(4)),
            AttendanceRecord::at(RecordKind::Entry, "ana", late),
        ];

        assert_eq!(ShiftLogic::open_shift_start(&records), Some(late));

        // off duty → no open shift
        assert_eq!(ShiftLogic::open_shift_start(&records[..2]), None);
    }
}
