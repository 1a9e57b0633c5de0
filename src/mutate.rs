// File: ./src/mutate.rs
/*! The one write path: toggling an item's status in its document.

Toggling is a binary affair regardless of the item's kind: done becomes
todo, everything else becomes done. The mutation is best-effort — if the
document changed underneath the item (its original text is no longer on the
recorded line) nothing is written and the caller gets `None` back. A
concurrent edit between our read and write can still lose an update; the
staleness check is a guard, not a transaction.
*/

use crate::model::classify;
use crate::model::{Marker, TodoItem};
use crate::source::VaultSource;
use anyhow::Result;

/// Toggles one item between the todo and done kinds, rewriting only the
/// bracket token on its line. Returns the updated item, or `None` when the
/// document no longer matches and nothing was written.
pub async fn toggle_item<S: VaultSource>(source: &S, item: &TodoItem) -> Result<Option<TodoItem>> {
    let content = match source.read(&item.file_path).await {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Cannot toggle '{}', read failed: {}", item.file_path, e);
            return Ok(None);
        }
    };

    let lines: Vec<&str> = content.split('\n').collect();
    let Some(line) = lines.get(item.line) else {
        return Ok(None);
    };
    if !line.contains(&item.original_text) {
        log::debug!(
            "Stale item at {}:{}, skipping toggle",
            item.file_path,
            item.line
        );
        return Ok(None);
    }

    let new_marker = if item.marker == Marker::Done {
        Marker::Todo
    } else {
        Marker::Done
    };
    let rewritten = classify::set_marker(line, new_marker);

    let updated: String = lines
        .iter()
        .enumerate()
        .map(|(i, l)| if i == item.line { rewritten.as_str() } else { *l })
        .collect::<Vec<&str>>()
        .join("\n");
    source.write(&item.file_path, &updated).await?;

    let mut toggled = item.clone();
    toggled.marker = new_marker;
    toggled.checked = new_marker.is_done();
    Ok(Some(toggled))
}
