//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Clinical work calculator.
///
/// Totals hours worked across shift types against an FTE-scaled annual
/// target and suggests how to schedule the remainder.
#[derive(Debug, Parser)]
#[command(name = "cwc", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calculate worked hours and suggest shifts for the remainder.
    Calc(CalcArgs),

    /// List the shift catalogs and suggestion field tokens.
    Catalog {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Arguments for the calc command.
///
/// Count values are taken as raw strings so that malformed input can be
/// coerced to zero instead of rejected, matching the form behavior.
#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Service Weekday shifts worked.
    #[arg(long, value_name = "COUNT", default_value = "0", allow_negative_numbers = true)]
    pub service_weekday: String,

    /// 4th Attending Weekday shifts worked.
    #[arg(long, value_name = "COUNT", default_value = "0", allow_negative_numbers = true)]
    pub fourth_attending_weekday: String,

    /// Jeopardy Weekday shifts worked.
    #[arg(long, value_name = "COUNT", default_value = "0", allow_negative_numbers = true)]
    pub jeopardy_weekday: String,

    /// Weekday call nights worked.
    #[arg(long, value_name = "COUNT", default_value = "0", allow_negative_numbers = true)]
    pub call_night_weekday: String,

    /// Service Weekend Day shifts worked.
    #[arg(long, value_name = "COUNT", default_value = "0", allow_negative_numbers = true)]
    pub service_weekend: String,

    /// 4th Attending Weekend Day shifts worked.
    #[arg(long, value_name = "COUNT", default_value = "0", allow_negative_numbers = true)]
    pub fourth_attending_weekend: String,

    /// Jeopardy Weekend Day shifts worked.
    #[arg(long, value_name = "COUNT", default_value = "0", allow_negative_numbers = true)]
    pub jeopardy_weekend: String,

    /// Weekend call nights worked.
    #[arg(long, value_name = "COUNT", default_value = "0", allow_negative_numbers = true)]
    pub call_night_weekend: String,

    /// Jeopardy conversions.
    #[arg(long, value_name = "COUNT", default_value = "0", allow_negative_numbers = true)]
    pub jeopardy_conversion: String,

    /// 4th Attending conversions.
    #[arg(long, value_name = "COUNT", default_value = "0", allow_negative_numbers = true)]
    pub fourth_attending_conversion: String,

    /// John Muir shifts worked.
    #[arg(long, value_name = "COUNT", default_value = "0", allow_negative_numbers = true)]
    pub john_muir: String,

    /// Full-time equivalent assignment.
    #[arg(long, value_name = "FTE", default_value = "1.0", allow_negative_numbers = true)]
    pub fte: String,

    /// Override a suggestion field, e.g. --set call-night=3 (repeatable).
    #[arg(long, value_name = "FIELD=COUNT")]
    pub set: Vec<String>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}
