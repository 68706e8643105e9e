//! Reporting utilities: terminal formatting for command output.

pub mod format;

pub use format::*;
