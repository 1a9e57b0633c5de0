// File: ./src/render/tag.rs
use crate::render::RenderContext;

fn is_tag_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '/')
}

/// Rewrites `#tag` tokens as tag spans. A token starts at a `#` that sits
/// at the start of the text or after whitespace and runs over tag
/// characters; `#` followed by anything else (a heading space, another `#`)
/// is left alone.
pub fn render_tags(text: &str, _ctx: &RenderContext) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    loop {
        let Some(at) = rest.find('#') else {
            break;
        };

        let boundary = rest[..at]
            .chars()
            .next_back()
            .map(|c| c.is_whitespace())
            .unwrap_or(true);
        let token_len = rest[at + 1..]
            .find(|c| !is_tag_char(c))
            .unwrap_or(rest.len() - at - 1);

        if boundary && token_len > 0 {
            out.push_str(&rest[..at]);
            out.push_str("<span class=\"tag\">");
            out.push_str(&rest[at..at + 1 + token_len]);
            out.push_str("</span>");
            rest = &rest[at + 1 + token_len..];
        } else {
            out.push_str(&rest[..at + 1]);
            rest = &rest[at + 1..];
        }
    }
    out.push_str(rest);
    out
}
