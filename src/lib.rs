//! `pocket-utils` library crate.
//!
//! A handful of independent utilities: text casing, rating filters, sequence
//! concatenation, vehicle descriptions, text-or-number dispatch, a
//! most-expensive reducer, day classification and a delayed async square.
//!
//! The binary (`pocket`) is a thin wrapper around this library so that the
//! operations stay testable without spawning processes.

pub mod app;
pub mod calendar;
pub mod cli;
pub mod collections;
pub mod config;
pub mod deferred;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod text;
pub mod value;
pub mod vehicle;

pub use calendar::day_type;
pub use collections::{concatenate, filter_by_rating, most_expensive};
pub use deferred::{Deferred, SQUARE_DELAY, spawn_square, square_after, square_async};
pub use error::SquareError;
pub use text::format_text;
pub use value::process_value;
