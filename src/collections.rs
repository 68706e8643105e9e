//! Filtering, concatenation and reduction over in-memory sequences.
//!
//! All functions are pure: inputs are borrowed or consumed, a new value is
//! returned, and relative input order is preserved wherever order matters.

use tracing::trace;

use crate::domain::{PricedItem, RatedItem};

/// Lowest rating kept by [`filter_by_rating`].
pub const MIN_RATING: f64 = 4.0;

/// Keep only items rated at least [`MIN_RATING`], in input order.
pub fn filter_by_rating(items: &[RatedItem]) -> Vec<RatedItem> {
    let kept: Vec<RatedItem> = items
        .iter()
        .filter(|item| item.rating >= MIN_RATING)
        .cloned()
        .collect();
    trace!(total = items.len(), kept = kept.len(), "filtered rated items");
    kept
}

/// Concatenate every source sequence, in argument order.
///
/// No sources (or only empty ones) gives an empty vector.
pub fn concatenate<T, S, I>(sources: I) -> Vec<T>
where
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = T>,
{
    sources.into_iter().flatten().collect()
}

/// The item with the highest price, or `None` for an empty slice.
///
/// Ties go to the earliest maximal item. An item only replaces the current
/// maximum when its price is strictly greater, so `NaN` prices never win.
pub fn most_expensive(items: &[PricedItem]) -> Option<&PricedItem> {
    let mut iter = items.iter();
    let first = iter.next()?;
    let best = iter.fold(first, |max, current| {
        if current.price > max.price { current } else { max }
    });
    trace!(name = %best.name, price = best.price, "most expensive item");
    Some(best)
}
