//! Input helpers.
//!
//! - JSON item-list ingest (`ingest`)

pub mod ingest;

pub use ingest::*;
