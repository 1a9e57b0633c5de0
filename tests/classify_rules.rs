// File: tests/classify_rules.rs
// The line grammar is strict: any deviation from
// `indent + list marker + " [" + token + "] " + text` is not a checklist
// item, and every bracket token maps to exactly one marker kind.

use std::collections::HashSet;
use strum::IntoEnumIterator;
use tickmark::model::Marker;
use tickmark::model::classify::{classify, is_todo_line, set_marker};

#[test]
fn rejects_everything_outside_the_grammar() {
    let not_todos = [
        "",
        "plain text",
        "[x] no list marker",
        "-[x] missing space after dash",
        "- [xx] two-character token",
        "- [x]missing separator space",
        "- [x]",
        "- x] missing open bracket",
        "- [x missing close bracket",
        "- [e] unrecognized token",
        "1. [x] ordered lists do not qualify",
        "> [x] neither do quotes",
        "- \t[x] tab instead of the separator space",
    ];
    for line in not_todos {
        assert!(classify(line).is_none(), "should reject: {:?}", line);
    }
}

#[test]
fn accepts_all_three_list_markers() {
    for line in ["- [ ] a", "* [ ] a", "+ [ ] a"] {
        assert!(is_todo_line(line), "should accept: {:?}", line);
    }
}

#[test]
fn token_mapping_is_a_bijection() {
    let mut seen = HashSet::new();
    for kind in Marker::iter() {
        let token = kind.token();
        assert!(seen.insert(token), "token {:?} is shared", token);
        assert_eq!(Marker::from_token(token), Some(kind));

        // Encoding a kind into a line and classifying it round-trips.
        let line = format!("- [{}] sample", token);
        let c = classify(&line).expect("encoded line must classify");
        assert_eq!(c.marker, kind);
    }
    assert_eq!(seen.len(), 22);
}

#[test]
fn case_matters_for_tokens() {
    assert_eq!(classify("- [S] save").unwrap().marker, Marker::Savings);
    assert!(classify("- [s] save").is_none());
    assert_eq!(classify("- [I] spark").unwrap().marker, Marker::Idea);
    assert_eq!(classify("- [i] info").unwrap().marker, Marker::Information);
}

#[test]
fn indent_and_payload_survive_verbatim() {
    let c = classify("   - [>] forwarded  to someone ").unwrap();
    assert_eq!(c.indent, 3);
    assert_eq!(c.payload, "forwarded  to someone ");
}

#[test]
fn set_marker_rewrites_only_the_token() {
    assert_eq!(set_marker("  - [ ] thing", Marker::Done), "  - [x] thing");
    assert_eq!(set_marker("  - [x] thing", Marker::Todo), "  - [ ] thing");
    // Non-qualifying lines are returned unchanged.
    assert_eq!(set_marker("nothing here", Marker::Done), "nothing here");
}
