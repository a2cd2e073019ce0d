use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::shift::ShiftLogic;
use crate::errors::AppResult;
use crate::store::audit;
use crate::store::ledger::LedgerStore;
use crate::ui::messages::success;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::In { user, name } = cmd {
        let store = LedgerStore::open(&cfg.ledger);
        let started = ShiftLogic::clock_in(&store, user, name)?;

        // audit line (non-blocking)
        if let Err(e) = audit::audit(
            &cfg.audit_log,
            "clock_in",
            user,
            &format!("{name} clocked in"),
        ) {
            eprintln!("⚠️ Failed to write audit log: {}", e);
        }

        success(format!(
            "{} is now on duty (since {}).",
            name,
            started.with_timezone(&Local).format("%H:%M:%S")
        ));
    }
    Ok(())
}
