use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::admin::AdminLogic;
use crate::errors::AppResult;
use crate::store::audit;
use crate::store::ledger::LedgerStore;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::ForceOutAll = cmd {
        let store = LedgerStore::open(&cfg.ledger);
        let affected = AdminLogic::force_clock_out_all(&store)?;

        // audit line (non-blocking)
        if let Err(e) = audit::audit(
            &cfg.audit_log,
            "force_out_all",
            "*",
            &format!("{affected} open shift(s) closed"),
        ) {
            eprintln!("⚠️ Failed to write audit log: {}", e);
        }

        success(format!("Forced {} open shift(s) closed.", affected));
    }
    Ok(())
}
