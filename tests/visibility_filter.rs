// File: tests/visibility_filter.rs
use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use strum::IntoEnumIterator;
use tickmark::config::MarkerVisibility;
use tickmark::filter::filter_items;
use tickmark::model::{Marker, TodoItem};

fn item_of(marker: Marker) -> TodoItem {
    TodoItem {
        marker,
        checked: marker.is_done(),
        file_path: Utf8PathBuf::from("a.md"),
        file_name: "a.md".to_string(),
        file_label: "a".to_string(),
        file_created: DateTime::<Utc>::UNIX_EPOCH,
        main_tag: None,
        sub_tag: None,
        line: 0,
        spaces_indented: 0,
        original_text: marker.to_string(),
        markup: marker.to_string(),
    }
}

fn one_of_each() -> Vec<TodoItem> {
    Marker::iter().map(item_of).collect()
}

#[test]
fn only_the_done_flag_off_hides_only_done() {
    let mut vis = MarkerVisibility::default();
    // Default already hides done; force everything else on explicitly.
    vis.show_done = false;
    vis.show_canceled = true;

    let kept = filter_items(one_of_each(), Some(&vis), true);
    assert_eq!(kept.len(), 21);
    assert!(kept.iter().all(|i| i.marker != Marker::Done));
}

#[test]
fn each_flag_controls_exactly_its_kind() {
    let mut vis = MarkerVisibility::default();
    vis.show_done = true;
    vis.show_question = false;

    let kept = filter_items(one_of_each(), Some(&vis), false);
    assert_eq!(kept.len(), 21);
    assert!(kept.iter().all(|i| i.marker != Marker::Question));
    assert!(kept.iter().any(|i| i.marker == Marker::Done));
}

#[test]
fn legacy_mode_drops_done_only() {
    let kept = filter_items(one_of_each(), None, false);
    assert_eq!(kept.len(), 21);
    assert!(kept.iter().all(|i| !i.checked));

    let kept = filter_items(one_of_each(), None, true);
    assert_eq!(kept.len(), 22);
}
