// File: ./src/model/classify.rs
// Line-level checklist grammar. A line qualifies only as:
//
//   <leading whitespace> <- | * | +> <space> [ <token> ] <space> <payload>
//
// Anything looser (two-character tokens, missing brackets, a tab instead of
// the separator space) disqualifies the line. Disqualification is not an
// error; the line is simply not a checklist item.

use crate::model::Marker;

/// The parsed pieces of a qualifying checklist line.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified<'a> {
    pub marker: Marker,
    /// Everything after the single space following `]`, untrimmed. Leading
    /// and trailing whitespace inside the payload is significant: tag and
    /// link stripping later operate on exact offsets.
    pub payload: &'a str,
    /// Count of leading whitespace characters before the list marker.
    pub indent: usize,
}

struct Parts<'a> {
    marker: Marker,
    payload: &'a str,
    indent: usize,
    token_start: usize,
    token_len: usize,
}

fn parse(line: &str) -> Option<Parts<'_>> {
    let mut indent = 0usize;
    let mut body_start = 0usize;
    for c in line.chars() {
        if c.is_whitespace() {
            indent += 1;
            body_start += c.len_utf8();
        } else {
            break;
        }
    }

    let body = &line[body_start..];
    let mut chars = body.chars();
    if !matches!(chars.next()?, '-' | '*' | '+') {
        return None;
    }

    let rest = body[1..].strip_prefix(' ')?;
    let rest = rest.strip_prefix('[')?;
    let token = rest.chars().next()?;
    let rest = rest[token.len_utf8()..].strip_prefix(']')?;
    let payload = rest.strip_prefix(' ')?;
    let marker = Marker::from_token(token)?;

    // "- [" is 3 bytes past the indentation.
    let token_start = body_start + 3;

    Some(Parts {
        marker,
        payload,
        indent,
        token_start,
        token_len: token.len_utf8(),
    })
}

/// Classifies one line of a document. Returns `None` for anything that is
/// not a checklist item, including lines carrying an unrecognized token.
pub fn classify(line: &str) -> Option<Classified<'_>> {
    parse(line).map(|p| Classified {
        marker: p.marker,
        payload: p.payload,
        indent: p.indent,
    })
}

pub fn is_todo_line(line: &str) -> bool {
    parse(line).is_some()
}

/// Rewrites only the bracket token of a qualifying line, leaving every other
/// byte untouched. Non-qualifying lines come back unchanged.
pub fn set_marker(line: &str, marker: Marker) -> String {
    match parse(line) {
        Some(p) => {
            let mut out = String::with_capacity(line.len());
            out.push_str(&line[..p.token_start]);
            out.push(marker.token());
            out.push_str(&line[p.token_start + p.token_len..]);
            out
        }
        None => line.to_string(),
    }
}
