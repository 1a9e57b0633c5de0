// File: ./src/render/link.rs
use crate::render::RenderContext;

// Wiki links come in three shapes: [[Target]], [[Target|alias]] and the
// embed form ![[Target]]. Display label priority: the context's link table
// (populated from the document's structural index), then the explicit
// alias, then the target itself.

fn label_for<'a>(ctx: &'a RenderContext, target: &'a str, alias: Option<&'a str>) -> &'a str {
    if let Some(label) = ctx.links.get(target) {
        return label;
    }
    alias.unwrap_or(target)
}

fn push_anchor(out: &mut String, target: &str, label: &str) {
    out.push_str("<a class=\"internal-link\" data-href=\"");
    out.push_str(target);
    out.push_str("\">");
    out.push_str(label);
    out.push_str("</a>");
}

fn render_wiki_links(text: &str, ctx: &RenderContext) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("[[") {
        let Some(end) = rest[start + 2..].find("]]") else {
            break;
        };

        // Swallow the `!` of an embed; both forms render as links here.
        let before = &rest[..start];
        let before = before.strip_suffix('!').unwrap_or(before);
        out.push_str(before);

        let inner = &rest[start + 2..start + 2 + end];
        let (target, alias) = match inner.split_once('|') {
            Some((t, a)) => (t, Some(a)),
            None => (inner, None),
        };
        push_anchor(&mut out, target, label_for(ctx, target, alias));
        rest = &rest[start + 2 + end + 2..];
    }
    out.push_str(rest);
    out
}

fn render_markdown_links(text: &str, ctx: &RenderContext) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('[') {
        let candidate = &rest[start..];
        let parsed = candidate.find("](").and_then(|mid| {
            let close = candidate[mid + 2..].find(')')?;
            let label = &candidate[1..mid];
            let target = &candidate[mid + 2..mid + 2 + close];
            Some((label, target, start + mid + 2 + close + 1))
        });

        match parsed {
            Some((label, target, consumed)) => {
                out.push_str(&rest[..start]);
                let label = if label.is_empty() {
                    label_for(ctx, target, None)
                } else {
                    label
                };
                push_anchor(&mut out, target, label);
                rest = &rest[consumed..];
            }
            None => {
                out.push_str(&rest[..start + 1]);
                rest = &rest[start + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Resolves wiki links, embeds and plain markdown links to anchors.
pub fn render_links(text: &str, ctx: &RenderContext) -> String {
    render_markdown_links(&render_wiki_links(text, ctx), ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn alias_and_table_resolution() {
        let mut links = HashMap::new();
        links.insert("Note".to_string(), "A Note".to_string());
        let ctx = RenderContext { links };

        assert_eq!(
            render_links("[[Note]]", &ctx),
            "<a class=\"internal-link\" data-href=\"Note\">A Note</a>"
        );
        // Table entry wins over the alias.
        assert_eq!(
            render_links("[[Note|ignored]]", &ctx),
            "<a class=\"internal-link\" data-href=\"Note\">A Note</a>"
        );
        assert_eq!(
            render_links("[[Other|alias]]", &RenderContext::default()),
            "<a class=\"internal-link\" data-href=\"Other\">alias</a>"
        );
    }

    #[test]
    fn embeds_render_like_links() {
        assert_eq!(
            render_links("see ![[img.png]]", &RenderContext::default()),
            "see <a class=\"internal-link\" data-href=\"img.png\">img.png</a>"
        );
    }

    #[test]
    fn markdown_links_render_with_their_url() {
        assert_eq!(
            render_links("read [docs](https://example.org)", &RenderContext::default()),
            "read <a class=\"internal-link\" data-href=\"https://example.org\">docs</a>"
        );
        // A lone bracket is left untouched.
        assert_eq!(
            render_links("a [not a link", &RenderContext::default()),
            "a [not a link"
        );
    }
}
