use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Regional holiday and event calendar.
#[derive(Parser)]
#[command(
    name = "calendario",
    version,
    about = "Holiday and event calendar for the Campinas metropolitan region"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON file of custom events (overrides the config file).
    #[arg(long, global = true)]
    pub custom: Option<PathBuf>,

    /// Reject custom events whose day does not exist instead of rolling over.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// List every event of a year.
    Year(YearArgs),
    /// Show a run of consecutive months.
    Window(WindowArgs),
    /// Print the date of Easter Sunday.
    Easter(EasterArgs),
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Calendar year.
    pub year: i32,
}

/// Arguments for the `window` subcommand.
#[derive(clap::Args)]
pub struct WindowArgs {
    /// First month as YYYY-MM (default: current month).
    #[arg(long)]
    pub from: Option<String>,

    /// Number of months (overrides the config file).
    #[arg(long)]
    pub months: Option<usize>,
}

/// Arguments for the `easter` subcommand.
#[derive(clap::Args)]
pub struct EasterArgs {
    /// Calendar year.
    pub year: i32,
}
