use super::app_config::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "billed",
    version,
    about = "Submit expense bills and browse submitted bills",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Bill store base URL.
    #[arg(long, env = "BILLED_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Client storage file path.
    #[arg(long, value_name = "PATH")]
    pub storage_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Client actions.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Remember the signed-in user.
    Login {
        /// User email.
        #[arg(long)]
        email: String,

        /// Sign in as an administrator.
        #[arg(long)]
        admin: bool,

        /// Store access token.
        #[arg(long, env = "BILLED_JWT", hide_env_values = true)]
        jwt: Option<String>,
    },

    /// Forget the signed-in user.
    Logout,

    /// List submitted bills, most recent first.
    Bills,

    /// Submit a new bill.
    New {
        /// Expense type, e.g. Transports.
        #[arg(long = "type", value_name = "TYPE")]
        expense_type: String,

        /// Expense name.
        #[arg(long)]
        name: String,

        /// Amount including taxes.
        #[arg(long)]
        amount: String,

        /// Expense date (YYYY-MM-DD).
        #[arg(long)]
        date: String,

        /// VAT amount.
        #[arg(long, default_value = "")]
        vat: String,

        /// VAT percentage.
        #[arg(long, default_value = "")]
        pct: String,

        /// Commentary.
        #[arg(long, default_value = "")]
        commentary: String,

        /// Receipt image (JPEG or PNG).
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Show the receipt preview of a bill.
    Preview {
        /// Bill identifier.
        id: String,
    },
}
