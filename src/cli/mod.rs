//! Command-line parsing for the `pocket` binary.
//!
//! Parsing and dispatch are kept apart from the operations themselves; every
//! subcommand maps onto one library function.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::domain::Day;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pocket", version, about = "Small everyday utilities")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Overridden by POCKET_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Uppercase text (or lowercase it with --lower).
    Case(CaseArgs),
    /// Keep items rated 4 or higher from a JSON list of {title, rating}.
    Ratings(FileArgs),
    /// Join comma-separated lists into one, in argument order.
    Concat(ConcatArgs),
    /// Describe a vehicle, or a car when --model is given.
    Vehicle(VehicleArgs),
    /// Length of text, or double a number.
    Value(ValueArgs),
    /// Most expensive item from a JSON list of {name, price}.
    Priciest(FileArgs),
    /// Classify a day as Weekday or Weekend (defaults to today).
    Day(DayArgs),
    /// Square a number after a delay; negative numbers fail immediately.
    Square(SquareArgs),
}

#[derive(Debug, Args)]
pub struct CaseArgs {
    pub text: String,

    /// Lowercase instead of uppercase.
    #[arg(long)]
    pub lower: bool,
}

#[derive(Debug, Args)]
pub struct FileArgs {
    /// JSON file to read, or `-` for stdin.
    #[arg(value_name = "FILE")]
    pub path: PathBuf,
}

#[derive(Debug, Args)]
pub struct ConcatArgs {
    /// Comma-separated lists, e.g. `1,2 3 ""`.
    #[arg(value_name = "LIST")]
    pub lists: Vec<String>,
}

#[derive(Debug, Args)]
pub struct VehicleArgs {
    #[arg(long)]
    pub make: String,

    #[arg(long, allow_negative_numbers = true)]
    pub year: i32,

    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Debug, Args)]
pub struct ValueArgs {
    #[arg(allow_hyphen_values = true)]
    pub input: String,

    /// Treat the input as text even if it parses as a number.
    #[arg(long)]
    pub text: bool,
}

#[derive(Debug, Args)]
pub struct DayArgs {
    #[arg(value_enum)]
    pub day: Option<Day>,
}

#[derive(Debug, Args)]
pub struct SquareArgs {
    #[arg(allow_negative_numbers = true)]
    pub n: f64,

    /// Override the delay in milliseconds (default from POCKET_SQUARE_DELAY_MS, else 1000).
    #[arg(long)]
    pub delay_ms: Option<u64>,
}
