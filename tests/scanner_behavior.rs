// File: tests/scanner_behavior.rs
// Corpus-level eligibility and the shape of the scan result.

use camino::Utf8Path;
use chrono::{DateTime, Duration, Utc};
use tickmark::config::Settings;
use tickmark::scanner::{ScanRequest, scan_corpus};
use tickmark::source::MemoryVault;

fn ts(secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(secs)
}

#[tokio::test]
async fn unmodified_documents_are_omitted_entirely() {
    let vault = MemoryVault::new();
    vault.insert("old.md", "#todo\n- [ ] stale\n", ts(10), ts(0));
    vault.insert("new.md", "#todo\n- [ ] fresh\n", ts(100), ts(0));

    let settings = Settings::default();
    let corpus = scan_corpus(&vault, &settings.scan_request(ts(50))).await;

    assert!(!corpus.files.contains_key(Utf8Path::new("old.md")));
    assert_eq!(corpus.files[Utf8Path::new("new.md")].len(), 1);
}

#[tokio::test]
async fn eligible_documents_keep_an_entry_even_when_filtered_empty() {
    let vault = MemoryVault::new();
    // The only item is done, and done is hidden by default.
    vault.insert("done.md", "#todo\n- [x] finished\n", ts(100), ts(0));

    let settings = Settings::default();
    let corpus = scan_corpus(&vault, &settings.scan_request(ts(0))).await;

    let items = &corpus.files[Utf8Path::new("done.md")];
    assert!(items.is_empty());
    assert_eq!(corpus.total_items(), 0);
}

#[tokio::test]
async fn documents_without_a_requested_tag_are_not_scanned() {
    let vault = MemoryVault::new();
    vault.insert("tagged.md", "#todo\n- [ ] in\n", ts(100), ts(0));
    vault.insert("untagged.md", "- [ ] out\n", ts(100), ts(0));

    let settings = Settings::default();
    let corpus = scan_corpus(&vault, &settings.scan_request(ts(0))).await;

    assert!(corpus.files.contains_key(Utf8Path::new("tagged.md")));
    assert!(!corpus.files.contains_key(Utf8Path::new("untagged.md")));
}

#[tokio::test]
async fn wildcard_request_scans_everything() {
    let vault = MemoryVault::new();
    vault.insert("tagged.md", "#todo\n- [ ] in\n", ts(100), ts(0));
    vault.insert("untagged.md", "- [ ] also in\n", ts(100), ts(0));

    let mut settings = Settings::default();
    settings.tag_names = String::new();
    let corpus = scan_corpus(&vault, &settings.scan_request(ts(0))).await;

    assert_eq!(corpus.files.len(), 2);
    assert_eq!(corpus.files[Utf8Path::new("untagged.md")].len(), 1);
}

#[tokio::test]
async fn include_patterns_gate_paths() {
    let vault = MemoryVault::new();
    vault.insert("notes/a.md", "#todo\n- [ ] kept\n", ts(100), ts(0));
    vault.insert("junk/b.md", "#todo\n- [ ] dropped\n", ts(100), ts(0));

    let mut settings = Settings::default();
    settings.include_files = "notes/*".to_string();
    let corpus = scan_corpus(&vault, &settings.scan_request(ts(0))).await;

    assert!(corpus.files.contains_key(Utf8Path::new("notes/a.md")));
    assert!(!corpus.files.contains_key(Utf8Path::new("junk/b.md")));
}

#[tokio::test]
async fn frontmatter_tags_count_for_eligibility() {
    let vault = MemoryVault::new();
    vault.insert(
        "fm.md",
        "---\ntags: [todo]\n---\n- [ ] via front matter\n",
        ts(100),
        ts(0),
    );

    let settings = Settings::default();
    let corpus = scan_corpus(&vault, &settings.scan_request(ts(0))).await;

    assert_eq!(corpus.files[Utf8Path::new("fm.md")].len(), 1);
}

#[tokio::test]
async fn legacy_mode_without_visibility_settings() {
    let vault = MemoryVault::new();
    vault.insert("mix.md", "#todo\n- [ ] open\n- [x] closed\n", ts(100), ts(0));

    let mut request = Settings::default().scan_request(ts(0));
    request.visibility = None;
    request.show_checked = false;

    let corpus = scan_corpus(&vault, &request).await;
    let items = &corpus.files[Utf8Path::new("mix.md")];
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].original_text, "open");
}

#[tokio::test]
async fn result_items_carry_document_identity() {
    let vault = MemoryVault::new();
    vault.insert("notes/plan.md", "#todo\n- [ ] map the week\n", ts(100), ts(7));

    let settings = Settings::default();
    let corpus = scan_corpus(&vault, &settings.scan_request(ts(0))).await;

    let item = &corpus.files[Utf8Path::new("notes/plan.md")][0];
    assert_eq!(item.file_name, "plan.md");
    assert_eq!(item.file_label, "plan");
    assert_eq!(item.file_created, ts(7));
    assert_eq!(item.line, 1);
}

#[tokio::test]
async fn scan_request_wildcard_needs_exactly_one_element() {
    let vault = MemoryVault::new();
    vault.insert("untagged.md", "- [ ] out\n", ts(100), ts(0));

    // A wildcard buried in a longer list is a literal label, not a
    // match-everything request.
    let mut request: ScanRequest = Settings::default().scan_request(ts(0));
    request.tags = vec!["*".to_string(), "todo".to_string()];

    let corpus = scan_corpus(&vault, &request).await;
    assert!(corpus.is_empty());
}
