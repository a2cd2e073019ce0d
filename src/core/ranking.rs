//! Leaderboard of worked hours across every user in the ledger.

use crate::core::hours::compute_hours;
use crate::core::window::filter_window_at;
use crate::errors::AppResult;
use crate::store::ledger::Ledger;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RankingRow {
    pub display_name: String,
    pub hours: f64,
}

/// Rank all users by hours worked inside the trailing window.
///
/// The display name is the username of the user's first-ever record and
/// is deliberately not refreshed when the user renames themselves.
/// Users with no worked hours in the window are dropped. The sort is
/// stable, so ties keep the ledger's user-id order.
pub fn compute_ranking(ledger: &Ledger, days: u32) -> AppResult<Vec<RankingRow>> {
    compute_ranking_at(ledger, days, Utc::now())
}

/// Same as [`compute_ranking`] with an explicit reference instant.
pub fn compute_ranking_at(
    ledger: &Ledger,
    days: u32,
    now: DateTime<Utc>,
) -> AppResult<Vec<RankingRow>> {
    let mut rows = Vec::new();

    for records in ledger.values() {
        let windowed = filter_window_at(records, days, now)?;
        let hours = compute_hours(&windowed);

        if hours <= 0.0 {
            continue;
        }

        let display_name = records
            .first()
            .map(|r| r.username.clone())
            .unwrap_or_else(|| "unknown".to_string());

        rows.push(RankingRow { display_name, hours });
    }

    rows.sort_by(|a, b| b.hours.total_cmp(&a.hours));

    Ok(rows)
}
