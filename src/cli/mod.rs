//! Command-line interface definitions.

pub mod book;
pub mod calendar;
pub mod check;
pub mod config;
pub mod promotions;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::domain::PackageId;
use crate::error::Result;

/// Promocal - Tour promotion calendar and booking availability.
#[derive(Parser, Debug)]
#[command(name = "promocal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the promotion calendar for a month
    Calendar(CalendarArgs),

    /// List promotions, optionally filtered to a single day
    Promotions(PromotionsArgs),

    /// Check booking availability for a package and date range
    Check(CheckArgs),

    /// Create a booking
    Book(BookArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `promocal config`
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Validate configuration file
    Validate(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `calendar` subcommand.
#[derive(Parser, Debug)]
pub struct CalendarArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Month to display, as yyyy-MM (defaults to the current month)
    #[arg(long)]
    pub month: Option<String>,

    /// Ask the backend for only the promotions it flags active
    #[arg(long)]
    pub active_only: bool,

    /// Override the first day of the week (e.g. "monday")
    #[arg(long)]
    pub week_start: Option<String>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Arguments for the `promotions` subcommand.
#[derive(Parser, Debug)]
pub struct PromotionsArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Show only promotions active on this day (yyyy-MM-dd)
    #[arg(long)]
    pub on: Option<String>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Arguments for the `check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Package to check
    #[arg(long)]
    pub package: PackageId,

    /// First day of the stay (yyyy-MM-dd)
    #[arg(long)]
    pub start: String,

    /// Last day of the stay (yyyy-MM-dd)
    #[arg(long)]
    pub end: String,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Arguments for the `book` subcommand.
#[derive(Parser, Debug)]
pub struct BookArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Package to book
    #[arg(long)]
    pub package: PackageId,

    /// Customer first name
    #[arg(long)]
    pub first_name: String,

    /// Customer last name
    #[arg(long)]
    pub last_name: String,

    /// Customer email address
    #[arg(long)]
    pub email: String,

    /// Customer phone number
    #[arg(long)]
    pub phone: String,

    /// First day of the stay (yyyy-MM-dd)
    #[arg(long)]
    pub start: String,

    /// Last day of the stay (yyyy-MM-dd)
    #[arg(long)]
    pub end: String,

    /// Booking amount
    #[arg(long)]
    pub amount: Decimal,

    /// Skip confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Route a parsed invocation to its handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Calendar(args) => calendar::execute(args).await,
        Commands::Promotions(args) => promotions::execute(args).await,
        Commands::Check(args) => check::execute(args).await,
        Commands::Book(args) => book::execute(args).await,
        Commands::Config(ConfigCommand::Validate(args)) => config::validate(args),
    }
}
