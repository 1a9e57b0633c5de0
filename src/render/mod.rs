// File: ./src/render/mod.rs
//! Inline markup pipeline for extracted checklist text.
//!
//! Rendering is an ordered list of text-transform stages sharing one
//! contract: `fn(&str, &RenderContext) -> String`. The order is load
//! bearing: comment removal runs first so commented-out links, tags and
//! highlights never render.

pub mod comment;
pub mod highlight;
pub mod link;
pub mod tag;

use std::collections::HashMap;

/// Per-item context handed to every stage. `links` maps a link target to
/// its display label, pre-resolved for the item's line so the link stage
/// never has to re-parse the whole document.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub links: HashMap<String, String>,
}

pub type Stage = fn(&str, &RenderContext) -> String;

/// The pipeline, in evaluation order.
pub const STAGES: &[Stage] = &[
    comment::strip_comments,
    link::render_links,
    tag::render_tags,
    highlight::render_highlights,
];

/// Runs the text payload of one checklist line through every stage.
pub fn render_markup(text: &str, ctx: &RenderContext) -> String {
    STAGES
        .iter()
        .fold(text.to_string(), |acc, stage| stage(&acc, ctx))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_with(target: &str, label: &str) -> RenderContext {
        let mut links = HashMap::new();
        links.insert(target.to_string(), label.to_string());
        RenderContext { links }
    }

    #[test]
    fn comments_are_removed_before_anything_renders() {
        let ctx = ctx_with("Note", "My Note");
        let out = render_markup("see %%[[Note]] ==x==%% done", &ctx);
        assert_eq!(out, "see  done");
    }

    #[test]
    fn link_labels_resolve_through_the_context_table() {
        let ctx = ctx_with("Projects/Roadmap", "Roadmap");
        let out = render_markup("ship [[Projects/Roadmap]]", &ctx);
        assert_eq!(
            out,
            "ship <a class=\"internal-link\" data-href=\"Projects/Roadmap\">Roadmap</a>"
        );
    }

    #[test]
    fn tags_and_highlights_render_inline() {
        let out = render_markup("==big== push for #launch", &RenderContext::default());
        assert_eq!(
            out,
            "<mark>big</mark> push for <span class=\"tag\">#launch</span>"
        );
    }
}
