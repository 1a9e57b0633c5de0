// File: ./src/render/highlight.rs
use crate::render::RenderContext;

/// Rewrites `==text==` spans as `<mark>` elements. An unpaired `==` is left
/// as literal text.
pub fn render_highlights(text: &str, _ctx: &RenderContext) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("==") {
        let Some(len) = rest[start + 2..].find("==") else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str("<mark>");
        out.push_str(&rest[start + 2..start + 2 + len]);
        out.push_str("</mark>");
        rest = &rest[start + 2 + len + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_become_marks_and_strays_stay() {
        let ctx = RenderContext::default();
        assert_eq!(
            render_highlights("a ==big== day", &ctx),
            "a <mark>big</mark> day"
        );
        assert_eq!(render_highlights("just == once", &ctx), "just == once");
        assert_eq!(
            render_highlights("====", &ctx),
            "<mark></mark>"
        );
    }
}
