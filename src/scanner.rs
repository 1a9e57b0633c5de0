// File: ./src/scanner.rs
/*! Corpus scan: which documents are (re)extracted this pass, and the fan-in
of their per-document results.

The scanner is a pure function of (documents, request, threshold): it keeps
no state between passes. Incremental behavior comes from the eligibility
threshold — documents unmodified since `since` are omitted from the result
entirely, and the caller merges the partial result into whatever corpus it
accumulated earlier. Every document that *was* eligible gets an entry, even
an empty one, so callers can clear stale items for it.
*/

use crate::config::{MarkerVisibility, Settings};
use crate::extract::{self, DocumentContext};
use crate::filter::filter_items;
use crate::model::{TodoItem, tags};
use crate::source::{DocumentMeta, VaultSource};
use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use std::collections::HashMap;

/// How many content reads are kept in flight at once.
const READ_CONCURRENCY: usize = 4;

/// One scan pass's parameters.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Requested tag labels; the single-element list `["*"]` matches every
    /// document.
    pub tags: Vec<String>,
    pub include_patterns: Vec<glob::Pattern>,
    /// Only documents modified at or after this instant are scanned.
    pub since: DateTime<Utc>,
    /// Legacy completed-items toggle, honored only when `visibility` is
    /// absent.
    pub show_checked: bool,
    pub show_all_todos: bool,
    pub visibility: Option<MarkerVisibility>,
}

impl ScanRequest {
    fn wildcard(&self) -> bool {
        self.tags.len() == 1 && self.tags[0] == "*"
    }
}

impl Settings {
    /// A scan request carrying these settings, with `since` as the
    /// incremental threshold.
    pub fn scan_request(&self, since: DateTime<Utc>) -> ScanRequest {
        ScanRequest {
            tags: self.requested_tags(),
            include_patterns: self.include_patterns(),
            since,
            show_checked: self.show_checked,
            show_all_todos: self.show_all_todos,
            visibility: Some(self.visibility.clone()),
        }
    }
}

/// The per-pass mapping from document path to its extracted, filtered item
/// sequence. An empty sequence means "scanned, nothing (visible) found",
/// which is distinct from the document being absent ("not rescanned").
#[derive(Debug, Clone, Default)]
pub struct CorpusResult {
    pub files: HashMap<Utf8PathBuf, Vec<TodoItem>>,
}

impl CorpusResult {
    pub fn total_items(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn is_eligible<S: VaultSource>(source: &S, req: &ScanRequest, doc: &DocumentMeta) -> bool {
    if doc.modified < req.since {
        return false;
    }
    // An empty pattern list includes everything.
    if !req.include_patterns.is_empty()
        && !req
            .include_patterns
            .iter()
            .any(|p| p.matches(doc.path.as_str()))
    {
        return false;
    }
    if req.wildcard() {
        return true;
    }
    match source.structure(&doc.path) {
        Some(structure) => structure
            .all_tag_tokens()
            .any(|t| tags::matches_requested(t, &req.tags)),
        None => false,
    }
}

/// Runs one scan pass over every eligible document of the source.
///
/// Content reads are issued concurrently; extraction runs as each read
/// lands. A document whose read fails is kept in the result with an empty
/// item list so downstream state for it is cleared rather than left stale.
pub async fn scan_corpus<S: VaultSource>(source: &S, req: &ScanRequest) -> CorpusResult {
    let eligible: Vec<DocumentMeta> = source
        .documents()
        .into_iter()
        .filter(|doc| is_eligible(source, req, doc))
        .collect();
    log::debug!(
        "Scanning {} eligible documents (tags: {:?})",
        eligible.len(),
        req.tags
    );

    let reads = eligible.into_iter().map(|meta| async move {
        let content = source.read(&meta.path).await;
        (meta, content)
    });
    let results: Vec<(DocumentMeta, anyhow::Result<String>)> = stream::iter(reads)
        .buffer_unordered(READ_CONCURRENCY)
        .collect()
        .await;

    let mut corpus = CorpusResult::default();
    for (meta, content) in results {
        let items = match content {
            Ok(content) => {
                let structure = source.structure(&meta.path).unwrap_or_default();
                let ctx = DocumentContext::build(
                    meta.clone(),
                    content,
                    structure,
                    &req.tags,
                    req.show_all_todos,
                );
                let items = extract::extract_document(&ctx);
                filter_items(items, req.visibility.as_ref(), req.show_checked)
            }
            Err(e) => {
                log::warn!("Failed to read '{}', clearing its items: {}", meta.path, e);
                Vec::new()
            }
        };
        corpus.files.insert(meta.path, items);
    }

    corpus
}
