use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "locwork")]
#[command(about = "Track which location you worked from, day by day", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Run the interactive menu (same as the `interactive` subcommand)
    #[arg(short = 'i', long, global = true)]
    pub interactive: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage known locations
    #[command(subcommand, alias = "loc")]
    Location(LocationCommands),

    /// Manage day records
    #[command(subcommand)]
    Log(LogCommands),

    /// Show the calendar and stats for one month
    Stats {
        /// Month to show (YYYY-MM, defaults to the current month)
        #[arg(short, long, value_parser = parse_month)]
        month: Option<NaiveDate>,
    },

    /// Browse months interactively (h/l to page, q to quit)
    View,

    /// Menu-driven interactive mode: log today, browse stats, quit
    #[command(alias = "i")]
    Interactive,
}

#[derive(Subcommand, Debug)]
pub enum LocationCommands {
    /// Add a new location to the list of known locations
    Add { name: String },

    /// Remove a location from known locations. Does not touch existing
    /// records that reference it.
    #[command(alias = "rm")]
    Remove { name: String },

    /// List known locations
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand, Debug)]
pub enum LogCommands {
    /// Record your location for a day
    Add {
        /// A location from the registry
        location: String,

        /// Record for today
        #[arg(short, long, conflicts_with = "date")]
        today: bool,

        /// Record for a specific date (YYYY-MM-DD)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Mark the day as a holiday / free day
        #[arg(long)]
        holiday: bool,
    },

    /// List all records in store order
    #[command(alias = "ls")]
    List,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn parse_month(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM: {e}"))
}
