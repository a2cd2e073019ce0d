//! Trailing time-window selection over a user's ledger slice.

use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;
use chrono::{DateTime, Duration, Utc};

/// Records whose timestamp lies in `[now − days, now]`, original order
/// preserved. Future-dated records beyond `now` are excluded.
pub fn filter_window(records: &[AttendanceRecord], days: u32) -> AppResult<Vec<AttendanceRecord>> {
    filter_window_at(records, days, Utc::now())
}

/// Same as [`filter_window`] with an explicit reference instant.
pub fn filter_window_at(
    records: &[AttendanceRecord],
    days: u32,
    now: DateTime<Utc>,
) -> AppResult<Vec<AttendanceRecord>> {
    if days == 0 {
        return Err(AppError::InvalidWindow(
            "window must cover at least one day".to_string(),
        ));
    }

    let from = now - Duration::days(i64::from(days));

    Ok(records
        .iter()
        .filter(|r| r.timestamp >= from && r.timestamp <= now)
        .cloned()
        .collect())
}

/// Parse a window argument: `day`, `week`, `month`, or a positive
/// number of days.
pub fn parse_window(text: &str) -> AppResult<u32> {
    match text.trim().to_lowercase().as_str() {
        "day" => Ok(1),
        "week" => Ok(7),
        "month" => Ok(30),
        other => other
            .parse::<u32>()
            .ok()
            .filter(|d| *d > 0)
            .ok_or_else(|| {
                AppError::InvalidWindow(format!(
                    "'{text}' is not day, week, month or a positive number of days"
                ))
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record_kind::RecordKind;

    fn record_at(now: DateTime<Utc>, hours_ago: i64) -> AttendanceRecord {
        AttendanceRecord::at(RecordKind::Entry, "ana", now - Duration::hours(hours_ago))
    }

    #[test]
    fn keeps_records_inside_the_window_in_order() {
        let now = Utc::now();
        let records = vec![
            record_at(now, 24 * 10), // too old for a 7-day window
            record_at(now, 24 * 3),
            record_at(now, 2),
        ];

        let kept = filter_window_at(&records, 7, now).unwrap();
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0], records[1]);
        assert_eq!(kept[1], records[2]);
    }

    #[test]
    fn excludes_future_dated_records() {
        let now = Utc::now();
        let future = AttendanceRecord::at(RecordKind::Entry, "ana", now + Duration::hours(1));

        let kept = filter_window_at(&[future], 7, now).unwrap();
        assert!(kept.is_empty());
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let now = Utc::now();
        let at_lower_bound = AttendanceRecord::at(RecordKind::Entry, "ana", now - Duration::days(7));
        let at_upper_bound = AttendanceRecord::at(RecordKind::Exit, "ana", now);

        let kept = filter_window_at(&[at_lower_bound, at_upper_bound], 7, now).unwrap();
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn zero_days_is_an_invalid_window() {
        let err = filter_window_at(&[], 0, Utc::now()).unwrap_err();
        assert!(matches!(err, AppError::InvalidWindow(_)));
    }

    #[test]
    fn parse_window_accepts_keywords_and_day_counts() {
        assert_eq!(parse_window("day").unwrap(), 1);
        assert_eq!(parse_window("week").unwrap(), 7);
        assert_eq!(parse_window("Month").unwrap(), 30);
        assert_eq!(parse_window("14").unwrap(), 14);

        assert!(parse_window("0").is_err());
        assert!(parse_window("-3").is_err());
        assert!(parse_window("fortnight").is_err());
    }
}
