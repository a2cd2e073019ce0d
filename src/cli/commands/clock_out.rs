use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::shift::ShiftLogic;
use crate::errors::AppResult;
use crate::store::audit;
use crate::store::ledger::LedgerStore;
use crate::ui::messages::success;
use crate::utils::duration_readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Out { user, name } = cmd {
        let store = LedgerStore::open(&cfg.ledger);
        let elapsed = ShiftLogic::clock_out(&store, user, name)?;

        // audit line (non-blocking)
        if let Err(e) = audit::audit(
            &cfg.audit_log,
            "clock_out",
            user,
            &format!("{name} clocked out"),
        ) {
            eprintln!("⚠️ Failed to write audit log: {}", e);
        }

        success(format!(
            "{} went off duty after {}.",
            name,
            duration_readable(elapsed)
        ));
    }
    Ok(())
}
