//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - item records read from JSON (`RatedItem`, `PricedItem`)
//! - the text-or-number tagged union (`Value`)
//! - calendar symbols (`Day`, `DayType`)

pub mod types;

pub use types::*;
