//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads settings and installs logging
//! - dispatches to the library operation for each subcommand
//! - prints the formatted result

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{CaseArgs, Cli, Command, ConcatArgs, DayArgs, FileArgs, SquareArgs, ValueArgs, VehicleArgs};
use crate::config::Settings;
use crate::domain::Value;
use crate::error::AppError;
use crate::report::{format_list, format_number, format_priced_item, format_rated_table};
use crate::vehicle::{Car, Vehicle};

/// Entry point for the `pocket` binary.
pub async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let settings = Settings::from_env()?;
    init_tracing(cli.verbose, &settings)?;

    debug!(command = ?cli.command, "dispatching");
    let output = execute(cli.command, &settings).await?;
    println!("{output}");
    Ok(())
}

/// Run one subcommand and return what should be printed.
pub async fn execute(command: Command, settings: &Settings) -> Result<String, AppError> {
    match command {
        Command::Case(args) => Ok(handle_case(args)),
        Command::Ratings(args) => handle_ratings(args),
        Command::Concat(args) => Ok(handle_concat(args)),
        Command::Vehicle(args) => Ok(handle_vehicle(args)),
        Command::Value(args) => Ok(handle_value(args)),
        Command::Priciest(args) => handle_priciest(args),
        Command::Day(args) => Ok(handle_day(args)),
        Command::Square(args) => handle_square(args, settings).await,
    }
}

fn handle_case(args: CaseArgs) -> String {
    crate::text::format_text(&args.text, Some(!args.lower))
}

fn handle_ratings(args: FileArgs) -> Result<String, AppError> {
    let items = crate::io::read_rated_items(&args.path)?;
    let kept = crate::collections::filter_by_rating(&items);
    Ok(format_rated_table(&kept).trim_end().to_string())
}

fn handle_concat(args: ConcatArgs) -> String {
    let joined = crate::collections::concatenate(args.lists.iter().map(|s| split_list(s)));
    format_list(&joined)
}

fn handle_vehicle(args: VehicleArgs) -> String {
    match args.model {
        Some(model) => Car::new(args.make, args.year, model).describe(),
        None => Vehicle::new(args.make, args.year).info(),
    }
}

fn handle_value(args: ValueArgs) -> String {
    let value = parse_value(&args.input, args.text);
    format_number(crate::value::process_value(&value))
}

fn handle_priciest(args: FileArgs) -> Result<String, AppError> {
    let items = crate::io::read_priced_items(&args.path)?;
    Ok(format_priced_item(crate::collections::most_expensive(&items)))
}

fn handle_day(args: DayArgs) -> String {
    let day = args.day.unwrap_or_else(crate::calendar::today);
    format!("{}: {}", day.display_name(), crate::calendar::day_type(day))
}

async fn handle_square(args: SquareArgs, settings: &Settings) -> Result<String, AppError> {
    let delay = args
        .delay_ms
        .map(std::time::Duration::from_millis)
        .unwrap_or(settings.square_delay);
    let squared = crate::deferred::square_after(args.n, delay).await?;
    Ok(format_number(squared))
}

/// Split a comma-separated list; the empty string is the empty list.
fn split_list(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

/// Finite numeric input dispatches as a number; anything else is text.
fn parse_value(input: &str, force_text: bool) -> Value {
    if !force_text {
        if let Ok(n) = input.trim().parse::<f64>() {
            if n.is_finite() {
                return Value::Number(n);
            }
        }
    }
    Value::Text(input.to_string())
}

fn init_tracing(verbose: u8, settings: &Settings) -> Result<(), AppError> {
    let directive = match (&settings.log_filter, verbose) {
        (Some(filter), _) => filter.clone(),
        (None, 0) => "warn".to_string(),
        (None, 1) => "debug".to_string(),
        (None, _) => "trace".to_string(),
    };
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| AppError::new(2, format!("Invalid log filter '{directive}': {e}")))?;

    // A subscriber may already be installed (e.g. in tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .try_init();
    Ok(())
}
