// File: ./src/render/comment.rs
use crate::render::RenderContext;

/// Drops `%%...%%` comment spans. An unterminated `%%` swallows the rest of
/// the text, matching how such comments behave in the source documents.
pub fn strip_comments(text: &str, _ctx: &RenderContext) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("%%") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("%%") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}
