// File: ./src/model/tags.rs
// Tag token handling: `#work/deep` splits into a primary label (`work`) and
// an optional secondary label (`deep`). Matching against configured labels
// is case-insensitive throughout.

use crate::model::TagMeta;

/// Splits a raw tag token (with or without its leading `#`) at the first
/// `/` below the root. The primary label is never empty for a non-empty
/// token.
pub fn tag_meta(raw: &str) -> TagMeta {
    let token = raw.strip_prefix('#').unwrap_or(raw);
    match token.split_once('/') {
        Some((main, sub)) => TagMeta {
            main: main.to_string(),
            sub: if sub.is_empty() {
                None
            } else {
                Some(sub.to_string())
            },
        },
        None => TagMeta {
            main: token.to_string(),
            sub: None,
        },
    }
}

/// True when the token's primary label is one of the requested labels.
pub fn matches_requested(raw: &str, requested: &[String]) -> bool {
    let main = tag_meta(raw).main.to_lowercase();
    requested.iter().any(|r| r.to_lowercase() == main)
}

/// Removes the first tag token whose primary label matches `main`
/// (case-insensitively), together with one adjacent whitespace character:
/// the following one when present, otherwise the preceding one. The rest of
/// the text is left byte-for-byte intact; a text without any matching token
/// comes back unchanged.
pub fn strip_tag(text: &str, main: &str) -> String {
    if main.is_empty() {
        return text.to_string();
    }
    let wanted = main.to_lowercase();

    let mut search = 0;
    while let Some(found) = text[search..].find('#') {
        let at = search + found;
        let token_end = text[at..]
            .find(char::is_whitespace)
            .map(|o| at + o)
            .unwrap_or(text.len());
        let token = &text[at..token_end];

        if tag_meta(token).main.to_lowercase() == wanted {
            let mut start = at;
            let mut end = token_end;
            if let Some(c) = text[end..].chars().next()
                && c.is_whitespace()
            {
                end += c.len_utf8();
            } else if let Some(c) = text[..start].chars().next_back()
                && c.is_whitespace()
            {
                start -= c.len_utf8();
            }

            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..start]);
            out.push_str(&text[end..]);
            return out;
        }
        search = at + 1;
    }

    text.to_string()
}
