// File: ./src/filter.rs
//! Marker visibility filtering, applied to each document's items before
//! they enter the corpus result.

use crate::config::MarkerVisibility;
use crate::model::TodoItem;

/// Keeps the items whose kind is visible.
///
/// With per-marker settings, each item is kept iff its kind's flag is on.
/// Without them (legacy mode) everything passes unless `show_checked` is
/// off, in which case only items of the done kind are dropped.
pub fn filter_items(
    items: Vec<TodoItem>,
    visibility: Option<&MarkerVisibility>,
    show_checked: bool,
) -> Vec<TodoItem> {
    match visibility {
        Some(vis) => items.into_iter().filter(|i| vis.shows(i.marker)).collect(),
        None if show_checked => items,
        None => items.into_iter().filter(|i| !i.checked).collect(),
    }
}
