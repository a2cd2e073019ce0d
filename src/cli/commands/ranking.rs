use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ranking::compute_ranking;
use crate::core::window::parse_window;
use crate::errors::AppResult;
use crate::store::ledger::LedgerStore;
use crate::ui::messages::{header, info};
use crate::utils::format::{pad_display, rank_marker};
use crate::utils::hours_readable;
use unicode_width::UnicodeWidthStr;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ranking { window, limit } = cmd {
        let days = parse_window(window.as_deref().unwrap_or(&cfg.default_window))?;

        let store = LedgerStore::open(&cfg.ledger);
        let rows = compute_ranking(&store.load()?, days)?;

        header(format!("Ranking — last {} day(s)", days));

        if rows.is_empty() {
            info("No worked hours recorded in this window.");
            return Ok(());
        }

        let limit = limit.unwrap_or(cfg.ranking_limit);
        let shown = if limit == 0 {
            &rows[..]
        } else {
            &rows[..rows.len().min(limit)]
        };

        let name_w = shown
            .iter()
            .map(|r| UnicodeWidthStr::width(r.display_name.as_str()))
            .max()
            .unwrap_or(8);

        for (i, row) in shown.iter().enumerate() {
            println!(
                "{} {} – {}",
                rank_marker(i + 1),
                pad_display(&row.display_name, name_w),
                hours_readable(row.hours)
            );
        }

        if limit != 0 && rows.len() > limit {
            info(format!("... and {} more", rows.len() - limit));
        }
    }
    Ok(())
}
