//! Administrative override: force open shifts closed.
//!
//! Authorization is the caller's problem (the host platform decides who
//! may run these commands); this module trusts its caller.

use crate::core::shift::ShiftLogic;
use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;
use crate::models::record_kind::RecordKind;
use crate::store::ledger::LedgerStore;

/// Per-target result of a forced clock-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceOutcome {
    /// The user was on duty; a synthetic Exit was appended.
    Closed,
    /// The user had no open shift; nothing was appended.
    NotOnDuty,
}

pub struct AdminLogic;

impl AdminLogic {
    /// Close one user's open shift, if any.
    pub fn force_clock_out(
        store: &LedgerStore,
        user_id: &str,
        username: &str,
    ) -> AppResult<ForceOutcome> {
        let ledger = store.load()?;
        let records = ledger.get(user_id).map(Vec::as_slice).unwrap_or_default();

        if !ShiftLogic::duty_status(records).is_on_duty() {
            return Ok(ForceOutcome::NotOnDuty);
        }

        match ShiftLogic::clock_out(store, user_id, username) {
            Ok(_) => Ok(ForceOutcome::Closed),
            // raced to off duty between the read and the critical section
            Err(AppError::NotOnDuty(_)) => Ok(ForceOutcome::NotOnDuty),
            Err(e) => Err(e),
        }
    }

    /// Close every open shift in the ledger in one atomic batch.
    /// Returns how many users were forced off duty.
    pub fn force_clock_out_all(store: &LedgerStore) -> AppResult<usize> {
        store.update(|ledger| {
            let mut affected = 0;

            for records in ledger.values_mut() {
                if !ShiftLogic::duty_status(records).is_on_duty() {
                    continue;
                }

                let username = records
                    .first()
                    .map(|r| r.username.clone())
                    .unwrap_or_else(|| "unknown".to_string());

                records.push(AttendanceRecord::new(RecordKind::Exit, &username));
                affected += 1;
            }

            Ok(affected)
        })
    }
}
