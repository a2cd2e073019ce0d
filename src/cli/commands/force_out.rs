use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::admin::{AdminLogic, ForceOutcome};
use crate::errors::AppResult;
use crate::store::audit;
use crate::store::ledger::LedgerStore;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::ForceOut { users, name } = cmd {
        let store = LedgerStore::open(&cfg.ledger);
        let ledger = store.load()?;

        for user_id in users {
            // explicit --name wins, else the user's first recorded name
            let username = name
                .clone()
                .or_else(|| {
                    ledger
                        .get(user_id)
                        .and_then(|records| records.first())
                        .map(|r| r.username.clone())
                })
                .unwrap_or_else(|| "unknown".to_string());

            match AdminLogic::force_clock_out(&store, user_id, &username)? {
                ForceOutcome::Closed => {
                    if let Err(e) = audit::audit(
                        &cfg.audit_log,
                        "force_out",
                        user_id,
                        &format!("Shift closed for {username}"),
                    ) {
                        eprintln!("⚠️ Failed to write audit log: {}", e);
                    }

                    success(format!("Forced clock-out for {}.", username));
                }
                ForceOutcome::NotOnDuty => {
                    warning(format!("{} has no open shift.", username));
                }
            }
        }
    }
    Ok(())
}
