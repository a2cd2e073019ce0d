use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if *print {
            LogLogic::print_log(cfg)?;
        } else {
            info("Nothing to do: use --print to show the audit log.");
        }
    }
    Ok(())
}
