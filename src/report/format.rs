//! Formatted terminal output.
//!
//! Formatting lives here so the operations themselves stay free of
//! presentation concerns, and output changes stay localized.

use std::fmt::Display;

use crate::domain::{PricedItem, RatedItem};

const LABEL_WIDTH: usize = 32;

/// Render a number the way a person would type it: `25`, not `25.0`.
pub fn format_number(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

/// Render a list as `[a, b, c]`.
pub fn format_list<T: Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(|x| x.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

/// Fixed-width table of rated items.
pub fn format_rated_table(items: &[RatedItem]) -> String {
    let mut out = String::new();
    out.push_str(format!("{:<LABEL_WIDTH$} {:>8}", "title", "rating").trim_end());
    out.push('\n');
    out.push_str(&format!("{:-<LABEL_WIDTH$} {:-<8}", "", ""));
    out.push('\n');

    for item in items {
        out.push_str(
            format!(
                "{:<LABEL_WIDTH$} {:>8}",
                truncate(&item.title, LABEL_WIDTH),
                format_number(item.rating),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// One line for the priced item, or `(none)` when there is no item.
pub fn format_priced_item(item: Option<&PricedItem>) -> String {
    match item {
        Some(item) => format!("{} ({})", item.name, format_number(item.price)),
        None => "(none)".to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('.');
    out
}
