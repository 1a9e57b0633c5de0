// File: ./src/model/item.rs
use crate::model::Marker;
use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};

/// A tag token split at the first `/` below the root: `#work/deep` gives
/// `main: "work"`, `sub: Some("deep")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMeta {
    pub main: String,
    pub sub: Option<String>,
}

/// Display metadata for one inline link or embed on an item's line: its
/// target path and optional display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMeta {
    pub target: String,
    pub label: Option<String>,
}

/// One extracted checklist line.
///
/// `line` together with `file_path` uniquely identifies the item within a
/// scan pass. `original_text` is the raw payload exactly as it appeared
/// after the bracket token; the status mutator re-validates against it
/// before touching the document.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub marker: Marker,
    /// Legacy flag kept for downstream consumers: true iff `marker` is the
    /// done kind.
    pub checked: bool,
    pub file_path: Utf8PathBuf,
    pub file_name: String,
    /// Display label for the owning document (file name minus `.md`).
    pub file_label: String,
    pub file_created: DateTime<Utc>,
    pub main_tag: Option<String>,
    pub sub_tag: Option<String>,
    /// Zero-based line number within the document.
    pub line: usize,
    pub spaces_indented: usize,
    pub original_text: String,
    /// Rendered inline markup: a pure function of `original_text` minus the
    /// triggering tag, and the link table captured at extraction time.
    pub markup: String,
}
