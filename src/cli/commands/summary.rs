use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::hours::compute_hours;
use crate::core::window::{filter_window, parse_window};
use crate::errors::AppResult;
use crate::store::ledger::LedgerStore;
use crate::ui::messages::header;
use crate::utils::hours_readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { user, window } = cmd {
        // window is validated before the ledger is touched
        let days = parse_window(window.as_deref().unwrap_or(&cfg.default_window))?;

        let store = LedgerStore::open(&cfg.ledger);
        let ledger = store.load()?;
        let records = ledger.get(user).map(Vec::as_slice).unwrap_or_default();

        let windowed = filter_window(records, days)?;
        let hours = compute_hours(&windowed);

        let name = records
            .first()
            .map(|r| r.username.as_str())
            .unwrap_or(user.as_str());

        header(format!("Summary — last {} day(s)", days));
        println!("⏱  {} worked approximately {}.", name, hours_readable(hours));
    }
    Ok(())
}
