//! Worked-hours aggregation over a sequence of attendance records.

use crate::models::record::AttendanceRecord;

/// Total hours worked, rounded to 2 decimals.
///
/// The k-th Entry is paired with the k-th Exit (positional pairing);
/// entries or exits beyond the shorter subsequence stay unmatched and
/// contribute nothing. An Exit stamped before its paired Entry yields a
/// negative span and is summed as-is rather than silently corrected.
pub fn compute_hours(records: &[AttendanceRecord]) -> f64 {
    let entries = records.iter().filter(|r| r.kind.is_entry());
    let exits = records.iter().filter(|r| r.kind.is_exit());

    let total_secs: i64 = entries
        .zip(exits)
        .map(|(entry, exit)| (exit.timestamp - entry.timestamp).num_seconds())
        .sum();

    round2(total_secs as f64 / 3600.0)
}

fn round2(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record_kind::RecordKind;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn empty_sequence_is_zero_hours() {
        assert_eq!(compute_hours(&[]), 0.0);
    }

    #[test]
    fn single_full_shift() {
        // 09:00:00 → 17:30:00 is 8.50 hours
        let start = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 6, 2, 17, 30, 0).unwrap();

        let records = vec![
            AttendanceRecord::at(RecordKind::Entry, "ana", start),
            AttendanceRecord::at(RecordKind::Exit, "ana", end),
        ];

        assert_eq!(compute_hours(&records), 8.50);
    }

    #[test]
    fn multiple_shifts_are_summed() {
        let base = Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap();

        let records = vec![
            AttendanceRecord::at(RecordKind::Entry, "ana", base),
            AttendanceRecord::at(RecordKind::Exit, "ana", base + Duration::hours(4)),
            AttendanceRecord::at(RecordKind::Entry, "ana", base + Duration::hours(5)),
            AttendanceRecord::at(RecordKind::Exit, "ana", base + Duration::minutes(5 * 60 + 90)),
        ];

        assert_eq!(compute_hours(&records), 5.50);
    }

    #[test]
    fn open_shift_is_excluded_from_the_total() {
        let base = Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap();

        let records = vec![
            AttendanceRecord::at(RecordKind::Entry, "ana", base),
            AttendanceRecord::at(RecordKind::Exit, "ana", base + Duration::hours(2)),
            // still on duty, no matching Exit yet
            AttendanceRecord::at(RecordKind::Entry, "ana", base + Duration::hours(3)),
        ];

        assert_eq!(compute_hours(&records), 2.0);
    }

    #[test]
    fn fractional_hours_round_to_two_decimals() {
        let base = Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap();

        // 10 minutes = 0.1666... hours → 0.17
        let records = vec![
            AttendanceRecord::at(RecordKind::Entry, "ana", base),
            AttendanceRecord::at(RecordKind::Exit, "ana", base + Duration::minutes(10)),
        ];

        assert_eq!(compute_hours(&records), 0.17);
    }

    #[test]
    fn exit_before_paired_entry_depresses_the_total() {
        let base = Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap();

        let records = vec![
            AttendanceRecord::at(RecordKind::Entry, "ana", base + Duration::hours(3)),
            AttendanceRecord::at(RecordKind::Exit, "ana", base + Duration::hours(2)),
        ];

        assert_eq!(compute_hours(&records), -1.0);
    }
}
