// File: ./src/extract.rs
/*! Per-document extraction: the scope decision, tag-block walking and item
assembly.

A document is scanned either in its entirety or block-by-block around the
tag occurrences that matched the request. The scope decision is a single
priority-ordered function so the tie-break order stays auditable:

1. wildcard request (`["*"]`) — whole document;
2. a requested tag declared in front matter — whole document, and that tag
   rides along as the trigger so it can be stripped from item text;
3. the "show all todos in a tagged file" preference — whole document;
4. otherwise — tagged blocks only.
*/

use crate::index::{DocumentStructure, LinkRecord, TagLocation};
use crate::model::classify::{self, Classified};
use crate::model::{LinkMeta, TagMeta, TodoItem, tags};
use crate::render::{RenderContext, render_markup};
use crate::source::DocumentMeta;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentScope {
    /// Scan every line. `trigger` is the first front-matter tag matching
    /// the request, when one exists; extracted items inherit it.
    EntireDocument { trigger: Option<String> },
    /// Scan only the contiguous block after each matching tag occurrence.
    TagBlocks,
}

pub fn decide_scope(
    structure: &DocumentStructure,
    requested: &[String],
    scan_whole_file: bool,
) -> DocumentScope {
    let wildcard = requested.len() == 1 && requested[0] == "*";
    let trigger = structure
        .frontmatter_tags
        .iter()
        .find(|t| tags::matches_requested(t, requested))
        .cloned();

    if wildcard || trigger.is_some() || scan_whole_file {
        DocumentScope::EntireDocument { trigger }
    } else {
        DocumentScope::TagBlocks
    }
}

/// Everything known about one document for the duration of a scan pass.
/// Built fresh per eligible document and discarded after extraction; never
/// mutated downstream.
#[derive(Debug, Clone)]
pub struct DocumentContext {
    pub meta: DocumentMeta,
    pub content: String,
    pub structure: DocumentStructure,
    /// Body tag occurrences matching the request, lowercased for stable
    /// item tag labels.
    pub valid_tags: Vec<TagLocation>,
    pub scope: DocumentScope,
}

impl DocumentContext {
    pub fn build(
        meta: DocumentMeta,
        content: String,
        structure: DocumentStructure,
        requested: &[String],
        scan_whole_file: bool,
    ) -> Self {
        let valid_tags = structure
            .tags
            .iter()
            .filter(|t| tags::matches_requested(&t.tag, requested))
            .map(|t| TagLocation {
                tag: t.tag.to_lowercase(),
                line: t.line,
            })
            .collect();
        let scope = decide_scope(&structure, requested, scan_whole_file);

        Self {
            meta,
            content,
            structure,
            valid_tags,
            scope,
        }
    }
}

/// The links anchored to exactly `line`, as display metadata records.
pub fn links_for_line(links: &[LinkRecord], line: usize) -> Vec<LinkMeta> {
    links
        .iter()
        .filter(|l| l.line == line)
        .map(|l| LinkMeta {
            target: l.target.clone(),
            label: l.label.clone(),
        })
        .collect()
}

/// Keys link metadata by target for substitution into rendered text. Later
/// records for the same target overwrite earlier ones; a record without a
/// display label falls back to its target.
pub fn map_link_meta(links: Vec<LinkMeta>) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for link in links {
        let label = link.label.unwrap_or_else(|| link.target.clone());
        map.insert(link.target, label);
    }
    map
}

/// Extracts every checklist item of one document according to its scope.
pub fn extract_document(ctx: &DocumentContext) -> Vec<TodoItem> {
    match &ctx.scope {
        DocumentScope::EntireDocument { trigger } => {
            let tag_meta = trigger.as_deref().map(tags::tag_meta);
            let mut items = Vec::new();
            for (i, line) in ctx.content.split('\n').enumerate() {
                if line.is_empty() {
                    continue;
                }
                if let Some(parts) = classify::classify(line) {
                    items.push(build_item(ctx, parts, i, tag_meta.as_ref()));
                }
            }
            items
        }
        DocumentScope::TagBlocks => ctx
            .valid_tags
            .iter()
            .flat_map(|tag| todos_from_tag_block(ctx, tag))
            .collect(),
    }
}

fn todos_from_tag_block(ctx: &DocumentContext, tag: &TagLocation) -> Vec<TodoItem> {
    let lines: Vec<&str> = ctx.content.split('\n').collect();
    let meta = tags::tag_meta(&tag.tag);

    let Some(anchor) = lines.get(tag.line) else {
        return Vec::new();
    };
    // A tag attached directly to a checklist line yields only that line,
    // not a block.
    if let Some(parts) = classify::classify(anchor) {
        return vec![build_item(ctx, parts, tag.line, Some(&meta))];
    }

    let mut items = Vec::new();
    for (i, line) in lines.iter().enumerate().skip(tag.line) {
        // One blank line directly under the tag is tolerated; any other
        // blank line ends the block.
        if i == tag.line + 1 && line.is_empty() {
            continue;
        }
        if line.is_empty() {
            break;
        }
        if let Some(parts) = classify::classify(line) {
            items.push(build_item(ctx, parts, i, Some(&meta)));
        }
    }
    items
}

fn build_item(
    ctx: &DocumentContext,
    parts: Classified<'_>,
    line_no: usize,
    tag: Option<&TagMeta>,
) -> TodoItem {
    let links = map_link_meta(links_for_line(&ctx.structure.links, line_no));
    let raw = parts.payload.to_string();
    let stripped = match tag {
        Some(meta) => tags::strip_tag(&raw, &meta.main),
        None => raw.clone(),
    };
    let markup = render_markup(&stripped, &RenderContext { links });

    TodoItem {
        marker: parts.marker,
        checked: parts.marker.is_done(),
        file_path: ctx.meta.path.clone(),
        file_name: ctx.meta.name.clone(),
        file_label: ctx.meta.label(),
        file_created: ctx.meta.created,
        main_tag: tag.map(|m| m.main.clone()),
        sub_tag: tag.and_then(|m| m.sub.clone()),
        line: line_no,
        spaces_indented: parts.indent,
        original_text: raw,
        markup,
    }
}
