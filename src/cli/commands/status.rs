use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::shift::ShiftLogic;
use crate::errors::AppResult;
use crate::store::ledger::LedgerStore;
use crate::ui::messages::{duty_tag, info};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { user } = cmd {
        let store = LedgerStore::open(&cfg.ledger);
        let ledger = store.load()?;

        match user {
            Some(id) => {
                let records = ledger.get(id).map(Vec::as_slice).unwrap_or_default();
                let status = ShiftLogic::duty_status(records);
                let name = records
                    .first()
                    .map(|r| r.username.as_str())
                    .unwrap_or(id.as_str());

                println!("{} {}", duty_tag(status.is_on_duty()), name);

                if let Some(started) = ShiftLogic::open_shift_start(records) {
                    println!(
                        "   since {}",
                        started.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
                    );
                }
            }
            None => {
                if ledger.is_empty() {
                    info("Ledger is empty.");
                    return Ok(());
                }

                let mut on_duty = 0;
                for (id, records) in &ledger {
                    let status = ShiftLogic::duty_status(records);
                    if status.is_on_duty() {
                        on_duty += 1;
                    }

                    let name = records
                        .first()
                        .map(|r| r.username.as_str())
                        .unwrap_or(id.as_str());

                    println!("{} {} ({})", duty_tag(status.is_on_duty()), name, id);
                }

                println!("\n{} user(s) currently on duty.", on_duty);
            }
        }
    }
    Ok(())
}
