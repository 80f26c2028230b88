use clap::{Parser, Subcommand};

/// Persian (Solar Hijri) calendar converter.
#[derive(Parser)]
#[command(
    name = "pcal",
    version,
    about = "Convert dates between the Persian and Gregorian calendars"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Trace intermediate conversion steps (0 or 1).
    #[arg(long, global = true, default_value_t = 0, allow_negative_numbers = true)]
    pub debug: i64,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print today's Persian date.
    Today,
    /// Convert a Persian date (YYYY/MM/DD) to Gregorian.
    ToGregorian(DateArgs),
    /// Convert a Gregorian date (YYYY-MM-DD) to Persian.
    FromGregorian(DateArgs),
    /// Print a Persian month as a weekly grid.
    Cal(CalArgs),
    /// Report whether a Persian year is a leap year.
    Leap(LeapArgs),
}

/// A single date argument.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Date as YYYY-MM-DD or YYYY/MM/DD.
    pub date: String,
}

/// Arguments for the `cal` subcommand.
#[derive(clap::Args)]
pub struct CalArgs {
    /// Persian year; defaults to the current year.
    pub year: Option<i32>,

    /// Month number (1-12) or Persian name; defaults to the current month.
    pub month: Option<String>,
}

/// Arguments for the `leap` subcommand.
#[derive(clap::Args)]
pub struct LeapArgs {
    /// Persian year.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,
}
