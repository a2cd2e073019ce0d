use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftledger
/// CLI application to track on-duty shifts and rank worked hours
#[derive(Parser)]
#[command(
    name = "shiftledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple shift tracking CLI: clock team members in and out, sum and rank worked hours",
    long_about = None
)]
pub struct Cli {
    /// Override ledger path (useful for tests or a custom ledger)
    #[arg(global = true, long = "ledger")]
    pub ledger: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the ledger and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Clock a user in (start of shift)
    In {
        /// User id of the member clocking in
        #[arg(long = "user", help = "User id of the member clocking in")]
        user: String,

        /// Display name recorded with the event
        #[arg(long = "name", help = "Display name recorded with the event")]
        name: String,
    },

    /// Clock a user out (end of shift)
    Out {
        /// User id of the member clocking out
        #[arg(long = "user", help = "User id of the member clocking out")]
        user: String,

        /// Display name recorded with the event
        #[arg(long = "name", help = "Display name recorded with the event")]
        name: String,
    },

    /// Show who is on duty
    Status {
        #[arg(long = "user", help = "Limit the status to one user id")]
        user: Option<String>,
    },

    /// Hours worked by one user in a trailing window
    Summary {
        #[arg(long = "user", help = "User id to summarize")]
        user: String,

        #[arg(
            long = "window",
            help = "Trailing window: day, week, month or a number of days"
        )]
        window: Option<String>,
    },

    /// Rank all users by hours worked in a trailing window
    Ranking {
        #[arg(
            long = "window",
            help = "Trailing window: day, week, month or a number of days"
        )]
        window: Option<String>,

        #[arg(long = "limit", help = "Maximum number of rows (0 = unlimited)")]
        limit: Option<usize>,
    },

    /// Force open shifts closed for the given users (admin)
    ForceOut {
        /// User ids to force off duty
        #[arg(required = true)]
        users: Vec<String>,

        #[arg(
            long = "name",
            help = "Display name for the synthetic exit (default: first recorded name)"
        )]
        name: Option<String>,
    },

    /// Force every open shift closed (admin)
    ForceOutAll,

    /// Print or manage the audit log
    Log {
        #[arg(long = "print", help = "Print the audit log")]
        print: bool,
    },

    /// Create a backup copy of the ledger
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export attendance records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "WINDOW",
            help = "Limit export to a trailing window: day, week, month or a number of days"
        )]
        window: Option<String>,

        #[arg(long, help = "Limit export to one user id")]
        user: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
