use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::audit;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - an empty JSON ledger document
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.ledger {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();

    println!("⚙️  Initializing shiftledger…");
    println!("📄 Config file : {}", path.display());
    println!("🗂️  Ledger      : {}", &cfg.ledger);

    // audit line (non-blocking)
    if let Err(e) = audit::audit(&cfg.audit_log, "init", &cfg.ledger, "Ledger initialized") {
        eprintln!("⚠️ Failed to write audit log: {}", e);
    }

    println!("🎉 shiftledger initialization completed!");
    Ok(())
}
